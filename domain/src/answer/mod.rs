//! Answer labels and answer sets
//!
//! The multi-select answer vocabulary: a small fixed set of option labels,
//! the threshold policy attached to each label, and ordered duplicate-free
//! sets of labels.

pub mod label;
pub mod set;

pub use label::{OptionLabel, ThresholdPolicy};
pub use set::AnswerSet;
