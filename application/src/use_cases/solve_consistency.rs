//! Self-Consistency + Self-Refinement use case
//!
//! Orchestrates the full pipeline for one question: draw `num_samples`
//! independent responses at elevated temperature, tally the parsed
//! option sets, apply the threshold policy, then run the two-call
//! refinement stage (critique, refine) on the voted answer.
//!
//! Failure isolation is a first-class requirement here: a sample whose
//! invocation errors or returns nothing becomes an empty [`SampleResult`]
//! and the pipeline continues. A question never aborts; even with every
//! sample failed the refinement stage still runs and the question is
//! still recorded.

use crate::ports::llm_gateway::{GenerationParams, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use aer_domain::{
    AerItem, AnswerSet, PromptTemplate, QuestionVotingRecord, RefinementOutcome, SampleResult,
    VoteTally, VotingConfig, representative_sample,
};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything the pipeline decided for one question
#[derive(Debug, Clone)]
pub struct SolvedQuestion {
    /// The answer produced by voting alone
    pub voted_answer: AnswerSet,
    /// The final answer, post-refinement
    pub final_answers: AnswerSet,
    /// The detail record for the run driver's collection
    pub record: QuestionVotingRecord,
}

/// Use case for solving one question by voting + refinement
pub struct SelfConsistencyUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    config: VotingConfig,
    max_concurrency: Option<usize>,
    response_char_cap: Option<usize>,
}

impl<G: LlmGateway + 'static> SelfConsistencyUseCase<G> {
    pub fn new(gateway: Arc<G>, config: VotingConfig) -> Self {
        Self {
            gateway,
            config,
            max_concurrency: None,
            response_char_cap: None,
        }
    }

    /// Bound the number of in-flight sampling requests.
    ///
    /// Without this the samples are drawn sequentially.
    pub fn with_max_concurrency(mut self, max: Option<usize>) -> Self {
        self.max_concurrency = max;
        self
    }

    /// Cap stored raw responses in the detail record (characters).
    ///
    /// Absent by default: responses are recorded verbatim.
    pub fn with_response_char_cap(mut self, cap: Option<usize>) -> Self {
        self.response_char_cap = cap;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, item: &AerItem, documents: &[String]) -> SolvedQuestion {
        self.execute_with_progress(item, documents, &NoProgress)
            .await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        item: &AerItem,
        documents: &[String],
        progress: &dyn ProgressNotifier,
    ) -> SolvedQuestion {
        info!(
            "Self-Consistency on {}: {} samples at temperature {}",
            item.event_uuid, self.config.num_samples, self.config.temperature
        );

        let samples = self.draw_samples(item, documents, progress).await;

        // Aggregation only starts once the full sample set is finalized
        let tally = VoteTally::from_samples(&samples);
        let voted_answer = tally.voted_answer(&self.config);
        debug!(
            "Votes [{}] -> voted answer [{}]",
            tally.summary(),
            voted_answer
        );
        progress.on_vote_complete(&tally.summary(), &voted_answer.to_string());

        let refinement = self.refine(item, documents, &samples, &voted_answer).await;
        progress.on_refinement_complete(refinement.fell_back);

        let record = QuestionVotingRecord::assemble(
            item.event_uuid.clone(),
            &self.config,
            &samples,
            &tally,
            &voted_answer,
            &refinement,
            self.response_char_cap,
        );

        SolvedQuestion {
            voted_answer,
            final_answers: refinement.refined,
            record,
        }
    }

    /// Draw `num_samples` independent responses.
    ///
    /// Every sample is built from the same prompts; only the sampling
    /// randomness differs. Results are reordered by `sample_id` so the
    /// outcome is identical however many requests were in flight.
    async fn draw_samples(
        &self,
        item: &AerItem,
        documents: &[String],
        progress: &dyn ProgressNotifier,
    ) -> Vec<SampleResult> {
        let system = PromptTemplate::solver_system();
        let user = PromptTemplate::solver_prompt(item, documents);
        let params = GenerationParams::sampling(self.config.temperature, self.config.top_p);

        progress.on_sampling_start(self.config.num_samples);

        let concurrency = self.max_concurrency.unwrap_or(1).max(1);
        let mut samples: Vec<SampleResult> = stream::iter((1..=self.config.num_samples).map(
            |sample_id| {
                let gateway = Arc::clone(&self.gateway);
                let user = user.clone();
                async move {
                    match gateway.complete(system, &user, params).await {
                        Ok(text) => SampleResult::from_response(sample_id, text),
                        Err(e) => {
                            warn!("Sample {} failed, absorbing: {}", sample_id, e);
                            SampleResult::failed(sample_id)
                        }
                    }
                }
            },
        ))
        .buffer_unordered(concurrency)
        .inspect(|sample| progress.on_sample_complete(sample.sample_id, sample.has_selection()))
        .collect()
        .await;

        samples.sort_by_key(|s| s.sample_id);
        samples
    }

    /// The two-call refinement stage: critique, then refine.
    ///
    /// Always exactly two invocations, sequential, whatever the sampling
    /// stage produced.
    async fn refine(
        &self,
        item: &AerItem,
        documents: &[String],
        samples: &[SampleResult],
        voted_answer: &AnswerSet,
    ) -> RefinementOutcome {
        let representative = representative_sample(samples, voted_answer)
            .map(|s| s.raw_response.as_str())
            .unwrap_or("");

        let critique_prompt = PromptTemplate::critique_prompt(item, voted_answer, representative);
        let critique = self
            .complete_or_empty(PromptTemplate::critique_system(), &critique_prompt, "critique")
            .await;

        let refine_prompt = PromptTemplate::refine_prompt(item, documents, voted_answer, &critique);
        let refine_response = self
            .complete_or_empty(PromptTemplate::refine_system(), &refine_prompt, "refine")
            .await;

        RefinementOutcome::from_response(critique, &refine_response, voted_answer)
    }

    async fn complete_or_empty(&self, system: &str, user: &str, stage: &str) -> String {
        match self
            .gateway
            .complete(system, user, GenerationParams::deterministic())
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("{} call failed, absorbing: {}", stage, e);
                String::new()
            }
        }
    }
}
