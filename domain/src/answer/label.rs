//! Option labels and their threshold policy
//!
//! Questions present four candidate causes labeled A through D. The last
//! label is conventionally the "none of the others / insufficient
//! evidence" slot and carries a stricter voting threshold.

use serde::{Deserialize, Serialize};

/// Threshold policy attached to an option label.
///
/// The vote aggregator never branches on a literal label; it asks the
/// label for its policy and looks up the matching threshold in the
/// voting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdPolicy {
    /// Accepted at the ordinary vote threshold
    Standard,
    /// Accepted only at the stricter threshold (the "none/insufficient" slot)
    Strict,
}

/// One of the fixed answer option labels
///
/// # Example
///
/// ```
/// use aer_domain::OptionLabel;
///
/// let label: OptionLabel = "c".parse().unwrap();
/// assert_eq!(label, OptionLabel::C);
/// assert_eq!(label.to_string(), "C");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// All labels in display order
    pub const ALL: [OptionLabel; 4] = [
        OptionLabel::A,
        OptionLabel::B,
        OptionLabel::C,
        OptionLabel::D,
    ];

    /// The label character, uppercase
    pub fn as_char(&self) -> char {
        match self {
            OptionLabel::A => 'A',
            OptionLabel::B => 'B',
            OptionLabel::C => 'C',
            OptionLabel::D => 'D',
        }
    }

    /// Parse a single character, ignoring case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionLabel::A),
            'B' => Some(OptionLabel::B),
            'C' => Some(OptionLabel::C),
            'D' => Some(OptionLabel::D),
            _ => None,
        }
    }

    /// The voting threshold policy for this label.
    ///
    /// D is the "none of the others / insufficient evidence" slot and is
    /// held to the stricter threshold.
    pub fn threshold_policy(&self) -> ThresholdPolicy {
        match self {
            OptionLabel::D => ThresholdPolicy::Strict,
            _ => ThresholdPolicy::Standard,
        }
    }
}

impl std::fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::str::FromStr for OptionLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                OptionLabel::from_char(c).ok_or_else(|| format!("Unknown option label: {}", s))
            }
            _ => Err(format!("Unknown option label: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_case_insensitive() {
        assert_eq!(OptionLabel::from_char('a'), Some(OptionLabel::A));
        assert_eq!(OptionLabel::from_char('D'), Some(OptionLabel::D));
        assert_eq!(OptionLabel::from_char('E'), None);
    }

    #[test]
    fn test_parse_rejects_multi_char() {
        assert!("AB".parse::<OptionLabel>().is_err());
        assert!("".parse::<OptionLabel>().is_err());
        assert_eq!(" b ".parse::<OptionLabel>().ok(), Some(OptionLabel::B));
    }

    #[test]
    fn test_threshold_policy() {
        assert_eq!(OptionLabel::A.threshold_policy(), ThresholdPolicy::Standard);
        assert_eq!(OptionLabel::C.threshold_policy(), ThresholdPolicy::Standard);
        assert_eq!(OptionLabel::D.threshold_policy(), ThresholdPolicy::Strict);
    }

    #[test]
    fn test_display_order() {
        let joined: String = OptionLabel::ALL.iter().map(|l| l.as_char()).collect();
        assert_eq!(joined, "ABCD");
    }
}
