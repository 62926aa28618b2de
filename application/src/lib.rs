//! Application layer for aer-lab
//!
//! Use cases and ports. The use cases drive the voting/refinement
//! pipeline against abstract collaborators (LLM gateway, document
//! retriever, progress notifier); adapters live in the infrastructure
//! layer.

pub mod evaluation;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use evaluation::{ErrorCase, ErrorKind, EvaluationSummary, Evaluator, PartialCase};
pub use ports::{
    llm_gateway::{GatewayError, GenerationParams, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    retriever::DocumentRetriever,
};
pub use use_cases::{
    solve_consistency::{SelfConsistencyUseCase, SolvedQuestion},
    solve_single::{SingleShotOutcome, SingleShotUseCase},
};
