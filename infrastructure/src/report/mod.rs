//! Results document

pub mod writer;

pub use writer::{ReportError, ResultsWriter, RunReport};
