//! Ordered, duplicate-free sets of option labels

use super::label::OptionLabel;
use serde::{Deserialize, Serialize};

/// A set of selected option labels.
///
/// Insertion order is preserved for display and detail records, but
/// equality is set equality: two answer sets compare equal when they
/// contain the same labels regardless of order.
///
/// # Example
///
/// ```
/// use aer_domain::{AnswerSet, OptionLabel};
///
/// let mut set = AnswerSet::new();
/// set.insert(OptionLabel::C);
/// set.insert(OptionLabel::A);
/// set.insert(OptionLabel::C); // duplicate, ignored
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.to_string(), "A, C"); // canonical display is sorted
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    labels: Vec<OptionLabel>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Insert a label, ignoring duplicates.
    ///
    /// Returns `true` if the label was not already present.
    pub fn insert(&mut self, label: OptionLabel) -> bool {
        if self.labels.contains(&label) {
            false
        } else {
            self.labels.push(label);
            true
        }
    }

    /// Check whether a label is in the set
    pub fn contains(&self, label: OptionLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in first-seen insertion order
    pub fn labels(&self) -> &[OptionLabel] {
        &self.labels
    }

    /// Iterate labels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = OptionLabel> + '_ {
        self.labels.iter().copied()
    }

    /// Labels sorted into display order (A before B before C before D)
    pub fn sorted(&self) -> Vec<OptionLabel> {
        let mut sorted = self.labels.clone();
        sorted.sort();
        sorted
    }
}

impl PartialEq for AnswerSet {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for AnswerSet {}

impl std::fmt::Display for AnswerSet {
    /// Canonical comma-separated form, sorted: `"A, C"`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .sorted()
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

impl FromIterator<OptionLabel> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = OptionLabel>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl From<Vec<OptionLabel>> for AnswerSet {
    fn from(labels: Vec<OptionLabel>) -> Self {
        labels.into_iter().collect()
    }
}
