//! Console progress reporting

use aer_application::ProgressNotifier;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Build the batch-level progress bar (hidden in quiet mode)
pub fn batch_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} questions ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

/// Per-question progress printed above the batch bar.
///
/// Holds a clone of the batch bar handle so its lines do not garble the
/// bar rendering.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

impl ProgressNotifier for ConsoleProgress {
    fn on_sampling_start(&self, total_samples: usize) {
        self.bar
            .println(format!("[Self-Consistency] drawing {} samples...", total_samples).dimmed().to_string());
    }

    fn on_sample_complete(&self, sample_id: usize, parsed_any: bool) {
        let status = if parsed_any { "parsed" } else { "no answer" };
        self.bar
            .println(format!("  sample {}: {}", sample_id, status).dimmed().to_string());
    }

    fn on_vote_complete(&self, tally_summary: &str, voted_answer: &str) {
        let voted = if voted_answer.is_empty() {
            "(empty)".to_string()
        } else {
            voted_answer.to_string()
        };
        self.bar
            .println(format!("  votes [{}] -> {}", tally_summary, voted.bold()));
    }

    fn on_refinement_complete(&self, fell_back: bool) {
        let note = if fell_back {
            "refinement kept the voted answer"
        } else {
            "refinement produced a new answer"
        };
        self.bar.println(format!("  {}", note.dimmed()));
    }
}
