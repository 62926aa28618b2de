//! Infrastructure layer for aer-lab
//!
//! Adapters behind the application-layer ports: the chat-completions
//! LLM gateway, the dataset loader, the head-truncation document
//! retriever, file configuration, and the results writer.

pub mod config;
pub mod dataset;
pub mod providers;
pub mod report;
pub mod retrieve;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, ModelSettings};
pub use dataset::{DatasetError, DatasetLoader};
pub use providers::{ChatCompletionsGateway, ChatGatewaySettings};
pub use report::{ResultsWriter, RunReport};
pub use retrieve::HeadRetriever;
