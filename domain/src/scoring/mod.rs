//! Official evaluation metric
//!
//! Per-instance scoring for multi-select answers:
//! - 1.0 — full match (prediction equals the gold set)
//! - 0.5 — partial match (non-empty proper subset, no wrong selection)
//! - 0.0 — anything else (wrong selection, superset, or empty)

use crate::answer::AnswerSet;
use serde::{Deserialize, Serialize};

/// Grade of one prediction against the gold answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchGrade {
    Full,
    Partial,
    Incorrect,
}

impl MatchGrade {
    /// Grade a prediction.
    ///
    /// Partial credit requires a non-empty prediction that is a proper
    /// subset of the gold set: every predicted label correct, at least
    /// one gold label missing.
    pub fn of(predicted: &AnswerSet, gold: &AnswerSet) -> Self {
        if predicted.is_empty() {
            return MatchGrade::Incorrect;
        }
        if predicted == gold {
            return MatchGrade::Full;
        }
        let proper_subset = predicted.iter().all(|l| gold.contains(l)) && predicted.len() < gold.len();
        if proper_subset {
            MatchGrade::Partial
        } else {
            MatchGrade::Incorrect
        }
    }

    /// The score this grade is worth
    pub fn score(&self) -> f64 {
        match self {
            MatchGrade::Full => 1.0,
            MatchGrade::Partial => 0.5,
            MatchGrade::Incorrect => 0.0,
        }
    }
}

impl std::fmt::Display for MatchGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchGrade::Full => write!(f, "full"),
            MatchGrade::Partial => write!(f, "partial"),
            MatchGrade::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// Score one instance under the official metric
pub fn instance_score(predicted: &AnswerSet, gold: &AnswerSet) -> f64 {
    MatchGrade::of(predicted, gold).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::OptionLabel::{A, B, C};

    #[test]
    fn test_full_match() {
        let predicted: AnswerSet = vec![C, A].into();
        let gold: AnswerSet = vec![A, C].into();
        assert_eq!(MatchGrade::of(&predicted, &gold), MatchGrade::Full);
        assert_eq!(instance_score(&predicted, &gold), 1.0);
    }

    #[test]
    fn test_partial_match_is_proper_subset() {
        let predicted: AnswerSet = vec![A].into();
        let gold: AnswerSet = vec![A, C].into();
        assert_eq!(instance_score(&predicted, &gold), 0.5);
    }

    #[test]
    fn test_any_wrong_selection_scores_zero() {
        let predicted: AnswerSet = vec![A, B].into();
        let gold: AnswerSet = vec![A, C].into();
        assert_eq!(instance_score(&predicted, &gold), 0.0);
    }

    #[test]
    fn test_superset_scores_zero() {
        let predicted: AnswerSet = vec![A, B, C].into();
        let gold: AnswerSet = vec![A, C].into();
        assert_eq!(instance_score(&predicted, &gold), 0.0);
    }

    #[test]
    fn test_empty_prediction_scores_zero() {
        let gold: AnswerSet = vec![A].into();
        assert_eq!(instance_score(&AnswerSet::new(), &gold), 0.0);
    }
}
