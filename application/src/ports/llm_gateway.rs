//! LLM Gateway port
//!
//! Defines the interface for one-shot chat completions. From the core's
//! point of view every invocation is atomic: it fails, or it returns a
//! complete string. An empty string and an error are equally "no usable
//! content" to the callers.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Sampling parameters for one generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature
    pub temperature: f64,
    /// Nucleus sampling parameter, when the stage sets one
    pub top_p: Option<f64>,
}

impl GenerationParams {
    /// Low-temperature parameters for deterministic stages
    /// (baseline solving, critique, refine)
    pub fn deterministic() -> Self {
        Self {
            temperature: 0.1,
            top_p: None,
        }
    }

    /// Elevated-randomness parameters for the consistency sampling stage
    pub fn sampling(temperature: f64, top_p: f64) -> Self {
        Self {
            temperature,
            top_p: Some(top_p),
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a model
/// provider. Implementations live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one system + user prompt pair and return the response text.
    ///
    /// An `Ok("")` is a legitimate return and means the provider produced
    /// no content.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: GenerationParams,
    ) -> Result<String, GatewayError>;
}
