//! Refinement outcome

use crate::answer::AnswerSet;
use crate::parse::extract_selected_options;
use serde::{Deserialize, Serialize};

/// Result of the Self-Refinement stage.
///
/// The refined answer supersedes the voted answer as the question's
/// final answer. Refinement never turns a non-empty voted answer into an
/// empty one: when the refinement response parses to nothing, the voted
/// answer is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementOutcome {
    /// The critique text from the first refinement call
    pub critique: String,
    /// The final refined answer
    pub refined: AnswerSet,
    /// Whether the refined answer fell back to the voted answer
    pub fell_back: bool,
}

impl RefinementOutcome {
    /// Parse a refinement response, falling back to the voted answer when
    /// nothing parseable comes back.
    pub fn from_response(
        critique: impl Into<String>,
        refine_response: &str,
        voted: &AnswerSet,
    ) -> Self {
        let parsed = extract_selected_options(refine_response);
        if parsed.is_empty() {
            Self {
                critique: critique.into(),
                refined: voted.clone(),
                fell_back: true,
            }
        } else {
            Self {
                critique: critique.into(),
                refined: parsed,
                fell_back: false,
            }
        }
    }
}
