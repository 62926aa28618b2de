//! Self-Consistency voting
//!
//! Types and pure functions for the voting pipeline: per-run
//! configuration, per-sample results, the vote tally with its threshold
//! policy, critique-sample selection, and the refinement outcome.

pub mod config;
pub mod critique;
pub mod refinement;
pub mod sample;
pub mod tally;

pub use config::VotingConfig;
pub use critique::representative_sample;
pub use refinement::RefinementOutcome;
pub use sample::SampleResult;
pub use tally::VoteTally;
