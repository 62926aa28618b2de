//! Critique-sample selection

use super::sample::SampleResult;
use crate::answer::AnswerSet;

/// Pick the sample whose response best represents the voted answer.
///
/// Ordered rule chain, evaluated over samples in `sample_id` order:
/// 1. first sample whose selection equals the voted answer exactly,
/// 2. else first sample with any non-empty selection,
/// 3. else the first sample regardless.
///
/// Returns `None` only for an empty sample slice.
pub fn representative_sample<'a>(
    samples: &'a [SampleResult],
    voted: &AnswerSet,
) -> Option<&'a SampleResult> {
    samples
        .iter()
        .find(|s| !voted.is_empty() && s.selected == *voted)
        .or_else(|| samples.iter().find(|s| s.has_selection()))
        .or_else(|| samples.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::OptionLabel::{A, B, C};

    fn sample(id: usize, labels: &[crate::answer::OptionLabel]) -> SampleResult {
        SampleResult {
            sample_id: id,
            raw_response: format!("response {}", id),
            selected: labels.to_vec().into(),
        }
    }

    #[test]
    fn test_prefers_first_exact_match() {
        let samples = vec![
            sample(1, &[A]),
            sample(2, &[A, C]),
            sample(3, &[C, A]), // also an exact match, but later
        ];
        let voted: AnswerSet = vec![A, C].into();
        let chosen = representative_sample(&samples, &voted).unwrap();
        assert_eq!(chosen.sample_id, 2);
    }

    #[test]
    fn test_falls_back_to_first_non_empty() {
        let samples = vec![sample(1, &[]), sample(2, &[B]), sample(3, &[A, C])];
        let voted: AnswerSet = vec![A, C, B].into();
        let chosen = representative_sample(&samples, &voted).unwrap();
        assert_eq!(chosen.sample_id, 2);
    }

    #[test]
    fn test_falls_back_to_first_sample() {
        let samples = vec![sample(1, &[]), sample(2, &[])];
        let voted = AnswerSet::new();
        let chosen = representative_sample(&samples, &voted).unwrap();
        assert_eq!(chosen.sample_id, 1);
    }

    #[test]
    fn test_empty_voted_never_matches_empty_selection() {
        // An empty voted answer must not treat an empty sample as "exact"
        let samples = vec![sample(1, &[]), sample(2, &[B])];
        let chosen = representative_sample(&samples, &AnswerSet::new()).unwrap();
        assert_eq!(chosen.sample_id, 2);
    }

    #[test]
    fn test_no_samples() {
        assert!(representative_sample(&[], &AnswerSet::new()).is_none());
    }
}
