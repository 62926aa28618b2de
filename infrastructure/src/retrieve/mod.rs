//! Document selection adapters
//!
//! Ranking strategies are out of scope here; the shipped adapter simply
//! caps how many documents reach the prompt, keeping dataset order.

use aer_application::ports::retriever::DocumentRetriever;

/// Presents the first `top_k` documents in dataset order
pub struct HeadRetriever {
    top_k: usize,
}

impl HeadRetriever {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }
}

impl Default for HeadRetriever {
    fn default() -> Self {
        Self { top_k: 10 }
    }
}

impl DocumentRetriever for HeadRetriever {
    fn select(&self, _event: &str, documents: &[String]) -> Vec<String> {
        documents.iter().take(self.top_k).cloned().collect()
    }
}
