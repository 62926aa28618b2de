//! Use cases - the solving pipelines

pub mod solve_consistency;
pub mod solve_single;

pub use solve_consistency::{SelfConsistencyUseCase, SolvedQuestion};
pub use solve_single::{SingleShotOutcome, SingleShotUseCase};
