//! Run-level evaluation bookkeeping
//!
//! Accumulates per-instance grades under the official metric into a run
//! summary: score breakdown, error-type classification, per-option
//! precision/recall/F1, and the stored error/partial cases. Owned by
//! the batch driver; the solving pipeline never sees it.

use aer_domain::{AnswerSet, MatchGrade, OptionLabel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Why a prediction scored zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The prediction was empty
    EmptyPrediction,
    /// At least one selected label is not in the gold set
    WrongSelection,
    /// Correct-but-incomplete; under the official metric this grades as
    /// partial, so seeing it among zero-scored cases flags a bug
    UnderSelection,
}

impl ErrorKind {
    fn classify(predicted: &AnswerSet, gold: &AnswerSet) -> Self {
        if predicted.is_empty() {
            return ErrorKind::EmptyPrediction;
        }
        if predicted.iter().any(|l| !gold.contains(l)) {
            return ErrorKind::WrongSelection;
        }
        ErrorKind::UnderSelection
    }
}

/// One zero-scored prediction, stored for diagnosis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorCase {
    pub question_id: String,
    pub event: String,
    pub predicted: Vec<OptionLabel>,
    pub gold: Vec<OptionLabel>,
    pub false_positives: Vec<OptionLabel>,
    pub false_negatives: Vec<OptionLabel>,
    pub kind: ErrorKind,
}

/// One half-scored prediction (correct but incomplete)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialCase {
    pub question_id: String,
    pub event: String,
    pub predicted: Vec<OptionLabel>,
    pub gold: Vec<OptionLabel>,
    pub missing: Vec<OptionLabel>,
}

/// Precision/recall/F1 for one option label
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OptionMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct OptionCounts {
    true_positives: usize,
    false_positives: usize,
    false_negatives: usize,
}

impl OptionCounts {
    fn metrics(&self) -> OptionMetrics {
        let tp = self.true_positives as f64;
        let fp = self.false_positives as f64;
        let fn_ = self.false_negatives as f64;

        let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
        let recall = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        OptionMetrics {
            precision,
            recall,
            f1,
        }
    }
}

/// Run summary under the official metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub total: usize,
    /// (1.0 * full + 0.5 * partial) / total
    pub official_score: f64,
    pub full_match: usize,
    pub partial_match: usize,
    pub incorrect: usize,
    /// Full matches only
    pub strict_accuracy: f64,
    pub macro_f1: f64,
    pub error_kinds: BTreeMap<ErrorKind, usize>,
    pub option_matrix: BTreeMap<OptionLabel, OptionMetrics>,
}

/// Accumulates instance grades across a run
#[derive(Debug, Default)]
pub struct Evaluator {
    total: usize,
    full: usize,
    partial: usize,
    incorrect: usize,
    error_kinds: BTreeMap<ErrorKind, usize>,
    option_counts: BTreeMap<OptionLabel, OptionCounts>,
    error_cases: Vec<ErrorCase>,
    partial_cases: Vec<PartialCase>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grade one prediction and fold it into the run statistics
    pub fn update(
        &mut self,
        question_id: &str,
        event: &str,
        predicted: &AnswerSet,
        gold: &AnswerSet,
    ) -> MatchGrade {
        self.total += 1;
        let grade = MatchGrade::of(predicted, gold);

        match grade {
            MatchGrade::Full => self.full += 1,
            MatchGrade::Partial => {
                self.partial += 1;
                self.partial_cases.push(PartialCase {
                    question_id: question_id.to_string(),
                    event: event.to_string(),
                    predicted: predicted.sorted(),
                    gold: gold.sorted(),
                    missing: gold
                        .sorted()
                        .into_iter()
                        .filter(|l| !predicted.contains(*l))
                        .collect(),
                });
            }
            MatchGrade::Incorrect => {
                self.incorrect += 1;
                let kind = ErrorKind::classify(predicted, gold);
                *self.error_kinds.entry(kind).or_insert(0) += 1;
                self.error_cases.push(ErrorCase {
                    question_id: question_id.to_string(),
                    event: event.to_string(),
                    predicted: predicted.sorted(),
                    gold: gold.sorted(),
                    false_positives: predicted
                        .sorted()
                        .into_iter()
                        .filter(|l| !gold.contains(*l))
                        .collect(),
                    false_negatives: gold
                        .sorted()
                        .into_iter()
                        .filter(|l| !predicted.contains(*l))
                        .collect(),
                    kind,
                });
            }
        }

        for label in OptionLabel::ALL {
            let in_predicted = predicted.contains(label);
            let in_gold = gold.contains(label);
            if !in_predicted && !in_gold {
                continue;
            }
            let counts = self.option_counts.entry(label).or_default();
            match (in_predicted, in_gold) {
                (true, true) => counts.true_positives += 1,
                (true, false) => counts.false_positives += 1,
                (false, true) => counts.false_negatives += 1,
                (false, false) => unreachable!(),
            }
        }

        grade
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// (1.0 * full + 0.5 * partial) / total
    pub fn official_score(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.full as f64 + 0.5 * self.partial as f64) / self.total as f64
    }

    /// Full matches only
    pub fn strict_accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.full as f64 / self.total as f64
    }

    /// Macro-averaged F1 over the labels seen in predictions or gold sets
    pub fn macro_f1(&self) -> f64 {
        if self.option_counts.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .option_counts
            .values()
            .map(|counts| counts.metrics().f1)
            .sum();
        sum / self.option_counts.len() as f64
    }

    pub fn error_cases(&self) -> &[ErrorCase] {
        &self.error_cases
    }

    pub fn partial_cases(&self) -> &[PartialCase] {
        &self.partial_cases
    }

    pub fn summary(&self) -> EvaluationSummary {
        EvaluationSummary {
            total: self.total,
            official_score: self.official_score(),
            full_match: self.full,
            partial_match: self.partial,
            incorrect: self.incorrect,
            strict_accuracy: self.strict_accuracy(),
            macro_f1: self.macro_f1(),
            error_kinds: self.error_kinds.clone(),
            option_matrix: self
                .option_counts
                .iter()
                .map(|(label, counts)| (*label, counts.metrics()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aer_domain::OptionLabel::{A, B, C};

    fn set(labels: &[OptionLabel]) -> AnswerSet {
        labels.to_vec().into()
    }

    #[test]
    fn test_score_breakdown() {
        let mut evaluator = Evaluator::new();
        evaluator.update("q1", "e1", &set(&[A, C]), &set(&[A, C]));
        evaluator.update("q2", "e2", &set(&[A]), &set(&[A, C]));
        evaluator.update("q3", "e3", &set(&[B]), &set(&[A]));
        evaluator.update("q4", "e4", &AnswerSet::new(), &set(&[A]));

        let summary = evaluator.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.full_match, 1);
        assert_eq!(summary.partial_match, 1);
        assert_eq!(summary.incorrect, 2);
        assert_eq!(summary.official_score, (1.0 + 0.5) / 4.0);
        assert_eq!(summary.strict_accuracy, 0.25);
    }

    #[test]
    fn test_error_kind_classification() {
        let mut evaluator = Evaluator::new();
        evaluator.update("q1", "e1", &AnswerSet::new(), &set(&[A]));
        evaluator.update("q2", "e2", &set(&[B]), &set(&[A]));

        let summary = evaluator.summary();
        assert_eq!(summary.error_kinds[&ErrorKind::EmptyPrediction], 1);
        assert_eq!(summary.error_kinds[&ErrorKind::WrongSelection], 1);
    }

    #[test]
    fn test_partial_case_records_missing_labels() {
        let mut evaluator = Evaluator::new();
        evaluator.update("q1", "event text", &set(&[A]), &set(&[A, C]));

        let cases = evaluator.partial_cases();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].missing, vec![C]);
    }

    #[test]
    fn test_option_metrics() {
        let mut evaluator = Evaluator::new();
        // A: tp twice; B: fp once, fn once
        evaluator.update("q1", "e1", &set(&[A]), &set(&[A]));
        evaluator.update("q2", "e2", &set(&[A, B]), &set(&[A]));
        evaluator.update("q3", "e3", &AnswerSet::new(), &set(&[B]));

        let summary = evaluator.summary();
        let a = summary.option_matrix[&A];
        assert_eq!(a.precision, 1.0);
        assert_eq!(a.recall, 1.0);
        let b = summary.option_matrix[&B];
        assert_eq!(b.precision, 0.0);
        assert_eq!(b.recall, 0.0);
    }

    #[test]
    fn test_empty_run() {
        let summary = Evaluator::new().summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.official_score, 0.0);
        assert_eq!(summary.macro_f1, 0.0);
    }
}
