//! Answer extraction from free-form model responses
//!
//! These functions turn a raw LLM response into a structured
//! [`AnswerSet`]. They are pure domain logic — no I/O, no session
//! management, just text pattern matching.
//!
//! The prompts instruct the model to finish with a line like
//! `Final Answer I Reasoned: A,C`. Parsing is tolerant of surrounding
//! prose, mixed case, and comma / `and` / whitespace separators, and
//! falls back to scanning the tail of the response for bare labels when
//! no marker is present. An unparseable response yields an empty set;
//! that is a contract, not an error.

use crate::answer::{AnswerSet, OptionLabel};

/// The final-answer marker the prompts instruct the model to emit.
///
/// Matched case-insensitively, anywhere in the response.
pub const FINAL_ANSWER_MARKER: &str = "final answer i reasoned:";

/// How far back the marker-less fallback scan reaches, in characters.
const FALLBACK_TAIL_CHARS: usize = 200;

/// Extract the set of selected option labels from a raw response.
///
/// Tokens outside the label vocabulary are dropped silently; they never
/// abort parsing of the remaining tokens.
///
/// # Example
///
/// ```
/// use aer_domain::{extract_selected_options, OptionLabel};
///
/// let set = extract_selected_options("Reasoning...\nFinal Answer I Reasoned: A, C");
/// assert!(set.contains(OptionLabel::A));
/// assert!(set.contains(OptionLabel::C));
/// assert_eq!(set.len(), 2);
///
/// assert!(extract_selected_options("").is_empty());
/// ```
pub fn extract_selected_options(response: &str) -> AnswerSet {
    if response.trim().is_empty() {
        return AnswerSet::new();
    }

    let lowered = response.to_lowercase();
    if let Some(marker_at) = lowered.find(FINAL_ANSWER_MARKER) {
        let after = &lowered[marker_at + FINAL_ANSWER_MARKER.len()..];
        let answer_line = after.lines().next().unwrap_or("");
        let parsed = parse_label_tokens(answer_line);
        if !parsed.is_empty() {
            return parsed;
        }
    }

    scan_tail_for_labels(response)
}

/// Parse one marker line into labels.
///
/// Splits on anything that is not alphanumeric, skips the word "and",
/// and keeps single-character tokens that name a valid label (any case).
fn parse_label_tokens(line: &str) -> AnswerSet {
    line.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty() && !token.eq_ignore_ascii_case("and"))
        .filter_map(|token| token.parse::<OptionLabel>().ok())
        .collect()
}

/// Marker-less fallback: collect standalone uppercase labels from the
/// last [`FALLBACK_TAIL_CHARS`] characters.
///
/// Uppercase only — a lowercase `a` in prose is almost always the
/// article, not the label.
fn scan_tail_for_labels(response: &str) -> AnswerSet {
    let tail: String = {
        let chars: Vec<char> = response.chars().collect();
        let start = chars.len().saturating_sub(FALLBACK_TAIL_CHARS);
        chars[start..].iter().collect()
    };

    tail.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| token.len() == 1 && token.chars().all(|c| c.is_ascii_uppercase()))
        .filter_map(|token| token.parse::<OptionLabel>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use OptionLabel::{A, B, C, D};

    #[test]
    fn test_marker_with_commas() {
        let set = extract_selected_options("Some reasoning.\nFinal Answer I Reasoned: A,C");
        assert_eq!(set, vec![A, C].into());
    }

    #[test]
    fn test_marker_case_and_and_separator() {
        let set = extract_selected_options("final answer i reasoned: a and c");
        assert_eq!(set, vec![A, C].into());
    }

    #[test]
    fn test_marker_whitespace_separator() {
        let set = extract_selected_options("Final Answer I Reasoned: B D");
        assert_eq!(set, vec![B, D].into());
    }

    #[test]
    fn test_marker_mid_text() {
        let set = extract_selected_options(
            "Final Answer I Reasoned: A, B\nLet me elaborate on why these two causes fit.",
        );
        assert_eq!(set, vec![A, B].into());
    }

    #[test]
    fn test_invalid_labels_dropped() {
        let set = extract_selected_options("Final Answer I Reasoned: A, E");
        assert_eq!(set, vec![A].into());
    }

    #[test]
    fn test_empty_and_markerless_prose() {
        assert!(extract_selected_options("").is_empty());
        assert!(extract_selected_options("no structured answer here at all").is_empty());
    }

    #[test]
    fn test_idempotent_on_canonical_output() {
        let set: AnswerSet = vec![A, C].into();
        let rendered = format!("Final Answer I Reasoned: {}", set);
        assert_eq!(extract_selected_options(&rendered), set);
    }

    #[test]
    fn test_fallback_scans_tail_uppercase_only() {
        let set = extract_selected_options("After weighing the evidence I settle on B and D.");
        assert_eq!(set, vec![B, D].into());
    }

    #[test]
    fn test_fallback_ignores_lowercase_articles() {
        let set = extract_selected_options("There was a delay before the event. C fits best.");
        assert_eq!(set, vec![C].into());
    }

    #[test]
    fn test_marker_line_without_labels_falls_back() {
        let set = extract_selected_options("Final Answer I Reasoned: none\nEarlier I leaned D.");
        assert_eq!(set, vec![D].into());
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = extract_selected_options("Final Answer I Reasoned: A, A, C");
        assert_eq!(set.len(), 2);
    }
}
