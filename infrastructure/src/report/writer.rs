//! End-of-run results document
//!
//! One JSON file per run: the evaluation summary, the per-question
//! voting records (when the voting approach ran), and the stored
//! error/partial cases. Self-contained; downstream analysis needs
//! nothing else from the run.

use aer_application::evaluation::{ErrorCase, EvaluationSummary, PartialCase};
use aer_domain::QuestionVotingRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing the results document
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything one run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Which approach produced the answers
    pub approach: String,
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub summary: EvaluationSummary,
    /// Present only for questions solved by the voting approach
    pub voting_records: Vec<QuestionVotingRecord>,
    pub error_cases: Vec<ErrorCase>,
    pub partial_cases: Vec<PartialCase>,
}

impl RunReport {
    pub fn new(approach: impl Into<String>, summary: EvaluationSummary) -> Self {
        Self {
            approach: approach.into(),
            generated_at: Utc::now().to_rfc3339(),
            summary,
            voting_records: Vec::new(),
            error_cases: Vec::new(),
            partial_cases: Vec::new(),
        }
    }

    pub fn with_voting_records(mut self, records: Vec<QuestionVotingRecord>) -> Self {
        self.voting_records = records;
        self
    }

    pub fn with_cases(mut self, errors: Vec<ErrorCase>, partials: Vec<PartialCase>) -> Self {
        self.error_cases = errors;
        self.partial_cases = partials;
        self
    }
}

/// Writes the results document to disk
pub struct ResultsWriter;

impl ResultsWriter {
    /// Write the report as pretty-printed JSON
    pub fn write(path: impl AsRef<Path>, report: &RunReport) -> Result<(), ReportError> {
        let path = path.as_ref();
        let file = fs::File::create(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer_pretty(file, report)?;
        info!("Results saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aer_application::Evaluator;
    use aer_domain::AnswerSet;
    use aer_domain::OptionLabel::A;

    fn summary() -> EvaluationSummary {
        let mut evaluator = Evaluator::new();
        let gold: AnswerSet = vec![A].into();
        evaluator.update("q1", "e1", &gold.clone(), &gold);
        evaluator.summary()
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let report = RunReport::new("self_consistency", summary());
        ResultsWriter::write(&path, &report).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let back: RunReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.approach, "self_consistency");
        assert_eq!(back.summary.total, 1);
        assert!(back.voting_records.is_empty());
    }

    #[test]
    fn test_write_to_bad_path_errors() {
        let report = RunReport::new("baseline", summary());
        let result = ResultsWriter::write("/nonexistent-dir/results.json", &report);
        assert!(matches!(result, Err(ReportError::Io { .. })));
    }
}
