//! Prompt templates for the solving pipeline

mod template;

pub use template::PromptTemplate;
