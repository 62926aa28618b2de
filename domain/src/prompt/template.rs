//! Prompt templates for each stage of the pipeline

use crate::answer::AnswerSet;
use crate::core::item::AerItem;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the solving stages (sampling and baseline)
    pub fn solver_system() -> &'static str {
        r#"You are an expert in causal reasoning and abductive inference.

CRITICAL EVALUATION RULE:
- Selecting ANY wrong option = 0 points (complete failure)
- Missing some correct options = 0.5 points (partial credit)
- Perfect match = 1.0 points

STRATEGY: Be CONSERVATIVE. Only select options you are HIGHLY CONFIDENT about.
It is much better to miss one correct answer than to include one wrong answer."#
    }

    /// User prompt asking the model to solve one question
    pub fn solver_prompt(item: &AerItem, documents: &[String]) -> String {
        format!(
            r#"TARGET EVENT:
{}

EVIDENCE DOCUMENTS:
{}

CANDIDATE CAUSES:
{}

Instruction:
1. For each option, find direct evidence in the documents, check temporal
   precedence, and look for a clear causal mechanism.
2. Select only options you are certain about. If two options say the same
   thing, select all of them or none of them.
3. Select the "none of the others" option only when every other option lacks
   evidence, and never alongside another cause.

State your final answer as the LAST line, strictly in this format:
"Final Answer I Reasoned: X" or "Final Answer I Reasoned: X,Y,Z""#,
            item.event,
            Self::document_digest(documents),
            Self::option_list(item),
        )
    }

    /// System prompt for the critique call
    pub fn critique_system() -> &'static str {
        r#"You are a critical reviewer of causal reasoning.
Your task is to find weaknesses in a proposed answer: selections without
documentary evidence, causes that are actually consequences, missed options
with strong support. Be specific and cite the reasoning you are critiquing."#
    }

    /// User prompt asking for a critique of the voted answer
    pub fn critique_prompt(item: &AerItem, voted: &AnswerSet, sample_response: &str) -> String {
        let voted_text = if voted.is_empty() {
            "(no option reached the vote threshold)".to_string()
        } else {
            voted.to_string()
        };

        format!(
            r#"TARGET EVENT:
{}

CANDIDATE CAUSES:
{}

A voting procedure over several independent analyses selected: {}

The most representative analysis was:
---
{}
---

Critique this answer. Point out unsupported selections, missed causes, and
any reasoning errors in the analysis. Do not give a new answer yet."#,
            item.event,
            Self::option_list(item),
            voted_text,
            sample_response,
        )
    }

    /// System prompt for the refine call
    pub fn refine_system() -> &'static str {
        r#"You are an expert in causal reasoning revising an answer after review.
Weigh the critique against the evidence, keep selections that survive it,
and drop or add selections only when the critique gives concrete grounds."#
    }

    /// User prompt asking for the refined answer
    pub fn refine_prompt(
        item: &AerItem,
        documents: &[String],
        voted: &AnswerSet,
        critique: &str,
    ) -> String {
        format!(
            r#"TARGET EVENT:
{}

EVIDENCE DOCUMENTS:
{}

CANDIDATE CAUSES:
{}

Previous answer (by vote): {}

Critique of that answer:
{}

Produce the final revised answer. Remember: a wrong selection scores zero.
State it as the LAST line, strictly in this format:
"Final Answer I Reasoned: X" or "Final Answer I Reasoned: X,Y,Z""#,
            item.event,
            Self::document_digest(documents),
            Self::option_list(item),
            voted,
            critique,
        )
    }

    /// Numbered document digest, e.g. `[Doc1]: ...`
    fn document_digest(documents: &[String]) -> String {
        documents
            .iter()
            .enumerate()
            .map(|(i, doc)| format!("[Doc{}]: {}", i + 1, doc))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Labeled option list, e.g. `A: ...`
    fn option_list(item: &AerItem) -> String {
        item.labeled_options()
            .map(|(label, text)| format!("{}: {}", label, text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::OptionLabel::{A, C};

    fn item() -> AerItem {
        AerItem {
            id: 7,
            event: "The bridge was closed overnight.".to_string(),
            event_uuid: "uuid-7".to_string(),
            title_snippets: vec![],
            documents: vec!["doc one".to_string(), "doc two".to_string()],
            options: vec![
                "Heavy flooding".to_string(),
                "Planned maintenance".to_string(),
                "A traffic accident".to_string(),
                "None of the others are correct".to_string(),
            ],
            answer: "A".to_string(),
        }
    }

    #[test]
    fn test_solver_prompt_contains_documents_and_options() {
        let item = item();
        let prompt = PromptTemplate::solver_prompt(&item, &item.documents);
        assert!(prompt.contains("[Doc1]: doc one"));
        assert!(prompt.contains("[Doc2]: doc two"));
        assert!(prompt.contains("A: Heavy flooding"));
        assert!(prompt.contains("D: None of the others are correct"));
        assert!(prompt.contains("Final Answer I Reasoned:"));
    }

    #[test]
    fn test_critique_prompt_carries_vote_and_sample() {
        let item = item();
        let voted: AnswerSet = vec![A, C].into();
        let prompt = PromptTemplate::critique_prompt(&item, &voted, "the sample text");
        assert!(prompt.contains("selected: A, C"));
        assert!(prompt.contains("the sample text"));
    }

    #[test]
    fn test_critique_prompt_handles_empty_vote() {
        let item = item();
        let prompt = PromptTemplate::critique_prompt(&item, &AnswerSet::new(), "sample");
        assert!(prompt.contains("no option reached the vote threshold"));
    }

    #[test]
    fn test_refine_prompt_carries_critique() {
        let item = item();
        let voted: AnswerSet = vec![A].into();
        let prompt = PromptTemplate::refine_prompt(&item, &item.documents, &voted, "too hasty");
        assert!(prompt.contains("Previous answer (by vote): A"));
        assert!(prompt.contains("too hasty"));
    }
}
