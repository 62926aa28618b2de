//! Dataset item for one abductive reasoning question

use crate::answer::{AnswerSet, OptionLabel};
use serde::{Deserialize, Serialize};

/// One multi-select causal reasoning question.
///
/// Carries the target event, the evidence documents retrieved for its
/// topic, the four candidate-cause texts, and the golden answer string
/// (comma-separated labels, e.g. `"A,C"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AerItem {
    /// Topic identifier shared with the document collection
    pub id: i64,
    /// The target event to explain
    pub event: String,
    /// Unique identifier of this question
    pub event_uuid: String,
    /// Title + snippet digest per document, same order as `documents`
    pub title_snippets: Vec<String>,
    /// Full evidence document texts
    pub documents: Vec<String>,
    /// Candidate cause texts, in label order A..D
    pub options: Vec<String>,
    /// Golden answer, comma-separated labels
    pub answer: String,
}

impl AerItem {
    /// Parse the golden answer string into an answer set.
    ///
    /// Tokens outside the label vocabulary are dropped.
    pub fn golden_answer(&self) -> AnswerSet {
        self.answer
            .split(',')
            .filter_map(|token| token.trim().parse::<OptionLabel>().ok())
            .collect()
    }

    /// The option texts paired with their labels, for prompt building
    pub fn labeled_options(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL
            .into_iter()
            .zip(self.options.iter().map(String::as_str))
    }
}
