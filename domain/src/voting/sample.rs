//! Per-sample results

use crate::answer::AnswerSet;
use crate::parse::extract_selected_options;
use serde::{Deserialize, Serialize};

/// Outcome of one model invocation in the consistency stage.
///
/// Immutable once created. An empty `selected` set covers both a genuine
/// "nothing parseable" response and an upstream transport failure; the
/// two are deliberately not distinguished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResult {
    /// 1-based id, assigned in issue order
    pub sample_id: usize,
    /// The raw response text, possibly empty
    pub raw_response: String,
    /// Labels parsed from the response, possibly empty
    pub selected: AnswerSet,
}

impl SampleResult {
    /// Build a result by parsing a raw response
    pub fn from_response(sample_id: usize, raw_response: impl Into<String>) -> Self {
        let raw_response = raw_response.into();
        let selected = extract_selected_options(&raw_response);
        Self {
            sample_id,
            raw_response,
            selected,
        }
    }

    /// Build the result for a failed invocation: empty response, empty set
    pub fn failed(sample_id: usize) -> Self {
        Self {
            sample_id,
            raw_response: String::new(),
            selected: AnswerSet::new(),
        }
    }

    /// Whether anything was parsed out of this sample
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }
}
