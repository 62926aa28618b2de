//! Voting configuration

use crate::answer::ThresholdPolicy;
use serde::{Deserialize, Serialize};

/// Parameters for one Self-Consistency voting run.
///
/// Immutable once supplied to the pipeline. The two thresholds are
/// independent: `strict_threshold` applies to labels whose
/// [`ThresholdPolicy`] is `Strict` (the "none/insufficient" slot) and is
/// typically tighter than `vote_threshold`.
///
/// # Example
///
/// ```
/// use aer_domain::VotingConfig;
///
/// let config = VotingConfig::default()
///     .with_num_samples(5)
///     .with_vote_threshold(3);
/// assert_eq!(config.num_samples, 5);
/// assert_eq!(config.strict_threshold, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VotingConfig {
    /// Number of independent samples to draw (> 0)
    pub num_samples: usize,
    /// Sampling temperature for the consistency stage
    pub temperature: f64,
    /// Nucleus sampling parameter for the consistency stage
    pub top_p: f64,
    /// Minimum count for an ordinary option to be accepted
    pub vote_threshold: usize,
    /// Minimum count for the strict ("none/insufficient") option
    pub strict_threshold: usize,
}

impl Default for VotingConfig {
    fn default() -> Self {
        Self {
            num_samples: 7,
            temperature: 0.7,
            top_p: 0.95,
            vote_threshold: 4,
            strict_threshold: 5,
        }
    }
}

impl VotingConfig {
    // ==================== Builder Methods ====================

    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_vote_threshold(mut self, threshold: usize) -> Self {
        self.vote_threshold = threshold;
        self
    }

    pub fn with_strict_threshold(mut self, threshold: usize) -> Self {
        self.strict_threshold = threshold;
        self
    }

    /// The minimum count required under the given policy
    pub fn threshold_for(&self, policy: ThresholdPolicy) -> usize {
        match policy {
            ThresholdPolicy::Standard => self.vote_threshold,
            ThresholdPolicy::Strict => self.strict_threshold,
        }
    }
}
