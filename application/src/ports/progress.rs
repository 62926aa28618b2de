//! Progress notification port
//!
//! Callbacks for reporting pipeline progress. Implementations live in
//! the presentation side (console reporter); the pipeline itself never
//! depends on how progress is displayed.

/// Callback for progress updates during one question's pipeline
pub trait ProgressNotifier: Send + Sync {
    /// Called before the sampling stage issues its requests
    fn on_sampling_start(&self, total_samples: usize);

    /// Called as each sample is collected
    fn on_sample_complete(&self, sample_id: usize, parsed_any: bool);

    /// Called once the tally and voted answer are fixed
    fn on_vote_complete(&self, tally_summary: &str, voted_answer: &str);

    /// Called after the refinement stage
    fn on_refinement_complete(&self, fell_back: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_sampling_start(&self, _total_samples: usize) {}
    fn on_sample_complete(&self, _sample_id: usize, _parsed_any: bool) {}
    fn on_vote_complete(&self, _tally_summary: &str, _voted_answer: &str) {}
    fn on_refinement_complete(&self, _fell_back: bool) {}
}
