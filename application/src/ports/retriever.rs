//! Document retriever port
//!
//! The pipeline asks this port for the evidence documents to put in a
//! prompt. Ranking strategy is the adapter's concern; the core only
//! consumes the selected list.

/// Selects the evidence documents for one question
pub trait DocumentRetriever: Send + Sync {
    /// Choose which documents to present for the given target event.
    ///
    /// Returns documents in presentation order. May return fewer than
    /// `documents.len()`, never more.
    fn select(&self, event: &str, documents: &[String]) -> Vec<String>;
}

/// Pass-through retriever: presents every document unchanged
pub struct AllDocuments;

impl DocumentRetriever for AllDocuments {
    fn select(&self, _event: &str, documents: &[String]) -> Vec<String> {
        documents.to_vec()
    }
}
