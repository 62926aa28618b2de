//! Command-line argument surface

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Solving approach for the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Approach {
    /// One deterministic invocation per question
    Single,
    /// Self-Consistency voting followed by Self-Refinement
    Consistency,
}

impl Approach {
    pub fn as_str(&self) -> &'static str {
        match self {
            Approach::Single => "single_shot",
            Approach::Consistency => "self_consistency_refinement",
        }
    }
}

/// Experiment harness for multi-select abductive event reasoning
#[derive(Debug, Parser)]
#[command(name = "aer-lab", version, about)]
pub struct Cli {
    /// Path to the topic documents file
    #[arg(long, default_value = "data/dev/docs.json")]
    pub docs_path: PathBuf,

    /// Path to the questions file (one JSON object per line)
    #[arg(long, default_value = "data/dev/questions.jsonl")]
    pub questions_path: PathBuf,

    /// Solving approach
    #[arg(long, value_enum, default_value_t = Approach::Consistency)]
    pub approach: Approach,

    /// Explicit config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ignore config files and use built-in defaults
    #[arg(long)]
    pub no_config: bool,

    /// Process only the first N questions
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// In-flight sampling requests per question (default: sequential)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Where to write the results document
    #[arg(short, long)]
    pub results: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["aer-lab"]);
        assert_eq!(cli.approach, Approach::Consistency);
        assert!(cli.limit.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_approach_flag() {
        let cli = Cli::parse_from(["aer-lab", "--approach", "single", "-l", "5"]);
        assert_eq!(cli.approach, Approach::Single);
        assert_eq!(cli.limit, Some(5));
    }

    #[test]
    fn test_approach_names() {
        assert_eq!(Approach::Single.as_str(), "single_shot");
        assert_eq!(
            Approach::Consistency.as_str(),
            "self_consistency_refinement"
        );
    }
}
