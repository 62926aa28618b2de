//! Single-shot baseline use case
//!
//! One deterministic low-temperature invocation, parsed with the same
//! answer extraction as the voting pipeline. The deterministic contrast
//! to the elevated-randomness sampling stage.

use crate::ports::llm_gateway::{GenerationParams, LlmGateway};
use aer_domain::{AerItem, AnswerSet, PromptTemplate, extract_selected_options};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one baseline invocation
#[derive(Debug, Clone)]
pub struct SingleShotOutcome {
    /// Labels parsed from the response (possibly empty)
    pub answers: AnswerSet,
    /// The raw response text
    pub raw_response: String,
}

/// Use case for the zero-shot baseline
pub struct SingleShotUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> SingleShotUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Ask once, deterministically, and parse the answer.
    ///
    /// A failed invocation is absorbed into an empty outcome, matching
    /// the failure policy of the voting pipeline.
    pub async fn execute(&self, item: &AerItem, documents: &[String]) -> SingleShotOutcome {
        info!("Single-shot baseline on {}", item.event_uuid);

        let user = PromptTemplate::solver_prompt(item, documents);
        let raw_response = match self
            .gateway
            .complete(
                PromptTemplate::solver_system(),
                &user,
                GenerationParams::deterministic(),
            )
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Baseline call failed, absorbing: {}", e);
                String::new()
            }
        };

        let answers = extract_selected_options(&raw_response);
        SingleShotOutcome {
            answers,
            raw_response,
        }
    }
}
