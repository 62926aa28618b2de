//! Per-question voting detail records
//!
//! Pure data-collection sidecar: records reproduce everything the voting
//! pipeline saw and decided, for later analysis. Assembly has no
//! influence on the decision path.

use crate::answer::{AnswerSet, OptionLabel};
use crate::voting::{RefinementOutcome, SampleResult, VoteTally, VotingConfig};
use serde::{Deserialize, Serialize};

/// Display-friendly record of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// 1-based id in issue order
    pub sample_id: usize,
    /// Selected labels, ordered and duplicate-free (first-seen order)
    pub selected: Vec<OptionLabel>,
    /// The raw response, verbatim unless a character cap was configured
    pub raw_response: String,
}

impl SampleRecord {
    fn from_sample(sample: &SampleResult, response_char_cap: Option<usize>) -> Self {
        let raw_response = match response_char_cap {
            Some(cap) => sample.raw_response.chars().take(cap).collect(),
            None => sample.raw_response.clone(),
        };
        Self {
            sample_id: sample.sample_id,
            selected: sample.selected.labels().to_vec(),
            raw_response,
        }
    }
}

/// Everything one question's voting pipeline produced.
///
/// Created once per question, appended to the run driver's collection,
/// never mutated after assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionVotingRecord {
    /// Unique question identifier
    pub question_id: String,
    /// Config fields, copied so the record is self-contained
    pub num_samples: usize,
    pub temperature: f64,
    pub vote_threshold: usize,
    pub strict_threshold: usize,
    /// Per-sample records, ordered by sample id
    pub samples: Vec<SampleRecord>,
    /// Per-option vote counts
    pub tally: VoteTally,
    /// The answer the vote produced (may be empty)
    pub voted_answer: AnswerSet,
    /// Critique text from the refinement stage
    pub critique: String,
    /// The final answer, post-refinement
    pub final_answers: AnswerSet,
}

impl QuestionVotingRecord {
    /// Assemble the record from the pipeline's artifacts.
    ///
    /// `response_char_cap` is the optional size-limiting mode; when absent
    /// raw responses are stored verbatim.
    pub fn assemble(
        question_id: impl Into<String>,
        config: &VotingConfig,
        samples: &[SampleResult],
        tally: &VoteTally,
        voted_answer: &AnswerSet,
        refinement: &RefinementOutcome,
        response_char_cap: Option<usize>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            num_samples: config.num_samples,
            temperature: config.temperature,
            vote_threshold: config.vote_threshold,
            strict_threshold: config.strict_threshold,
            samples: samples
                .iter()
                .map(|s| SampleRecord::from_sample(s, response_char_cap))
                .collect(),
            tally: tally.clone(),
            voted_answer: voted_answer.clone(),
            critique: refinement.critique.clone(),
            final_answers: refinement.refined.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::OptionLabel::{A, C};

    fn artifacts() -> (VotingConfig, Vec<SampleResult>, VoteTally, AnswerSet) {
        let config = VotingConfig::default()
            .with_num_samples(2)
            .with_vote_threshold(2);
        let samples = vec![
            SampleResult::from_response(1, "Final Answer I Reasoned: C,A"),
            SampleResult::from_response(2, "Final Answer I Reasoned: A"),
        ];
        let tally = VoteTally::from_samples(&samples);
        let voted = tally.voted_answer(&config);
        (config, samples, tally, voted)
    }

    #[test]
    fn test_assemble_reproduces_samples_verbatim() {
        let (config, samples, tally, voted) = artifacts();
        let refinement = RefinementOutcome::from_response("critique text", "", &voted);
        let record = QuestionVotingRecord::assemble(
            "uuid-9", &config, &samples, &tally, &voted, &refinement, None,
        );

        assert_eq!(record.question_id, "uuid-9");
        assert_eq!(record.samples.len(), 2);
        assert_eq!(record.samples[0].raw_response, "Final Answer I Reasoned: C,A");
        // first-seen label order, not sorted
        assert_eq!(record.samples[0].selected, vec![C, A]);
        assert_eq!(record.voted_answer, vec![A].into());
        assert_eq!(record.final_answers, vec![A].into());
    }

    #[test]
    fn test_response_cap_truncates() {
        let (config, samples, tally, voted) = artifacts();
        let refinement = RefinementOutcome::from_response("", "", &voted);
        let record = QuestionVotingRecord::assemble(
            "uuid-9", &config, &samples, &tally, &voted, &refinement, Some(12),
        );
        assert_eq!(record.samples[0].raw_response, "Final Answer");
    }

    #[test]
    fn test_record_serializes_round_trip() {
        let (config, samples, tally, voted) = artifacts();
        let refinement = RefinementOutcome::from_response("c", "Final Answer I Reasoned: A", &voted);
        let record = QuestionVotingRecord::assemble(
            "uuid-1", &config, &samples, &tally, &voted, &refinement, None,
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: QuestionVotingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.question_id, record.question_id);
        assert_eq!(back.tally, record.tally);
        assert_eq!(back.final_answers, record.final_answers);
    }
}
