//! Vote tallying and threshold application

use super::config::VotingConfig;
use super::sample::SampleResult;
use crate::answer::{AnswerSet, OptionLabel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-option vote counts over one question's samples.
///
/// Every known label has an entry, zero included. A sample that selected
/// several options increments each of them, so counts are independent
/// and their sum may exceed the sample count. Derived deterministically
/// from the ordered sample sequence; never mutated afterwards.
///
/// # Example
///
/// ```
/// use aer_domain::{OptionLabel, SampleResult, VoteTally, VotingConfig};
///
/// let samples = vec![
///     SampleResult::from_response(1, "Final Answer I Reasoned: A,C"),
///     SampleResult::from_response(2, "Final Answer I Reasoned: A"),
///     SampleResult::from_response(3, ""),
/// ];
/// let tally = VoteTally::from_samples(&samples);
/// assert_eq!(tally.count(OptionLabel::A), 2);
/// assert_eq!(tally.count(OptionLabel::D), 0);
///
/// let config = VotingConfig::default().with_vote_threshold(2);
/// let voted = tally.voted_answer(&config);
/// assert_eq!(voted.to_string(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    counts: BTreeMap<OptionLabel, usize>,
}

impl VoteTally {
    /// Tally the selected options across all samples.
    ///
    /// Samples with an empty selection contribute nothing.
    pub fn from_samples(samples: &[SampleResult]) -> Self {
        let mut counts: BTreeMap<OptionLabel, usize> =
            OptionLabel::ALL.into_iter().map(|l| (l, 0)).collect();

        for sample in samples {
            for label in sample.selected.iter() {
                *counts.entry(label).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// The vote count for one label
    pub fn count(&self, label: OptionLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Iterate `(label, count)` in display order
    pub fn counts(&self) -> impl Iterator<Item = (OptionLabel, usize)> + '_ {
        self.counts.iter().map(|(l, c)| (*l, *c))
    }

    /// Apply the threshold policy and produce the voted answer.
    ///
    /// A label is included iff its count reaches the threshold its policy
    /// selects. Ties at the threshold are included. The result may be
    /// empty; callers must cope with an empty voted answer.
    pub fn voted_answer(&self, config: &VotingConfig) -> AnswerSet {
        self.counts()
            .filter(|(label, count)| *count >= config.threshold_for(label.threshold_policy()))
            .map(|(label, _)| label)
            .collect()
    }

    /// Compact display form, e.g. `"A:4, B:1, C:4, D:0"`
    pub fn summary(&self) -> String {
        self.counts()
            .map(|(label, count)| format!("{}:{}", label, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
