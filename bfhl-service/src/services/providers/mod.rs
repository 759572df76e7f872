//! Generative-text backends for the `AI` key.
//!
//! The dispatcher only sees the [`AiGateway`] trait, so tests and offline
//! deployments can swap the Gemini client for [`mock::MockAiGateway`].

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Instruction appended to every question before it is sent upstream.
pub const ONE_WORD_INSTRUCTION: &str = ". Answer in ONE word only.";

/// Text used when the upstream reply has no usable text part.
pub const FALLBACK_ANSWER: &str = "Unknown";

/// Error type for gateway operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timed out after {0} ms")]
    Timeout(u128),
}

/// Capability to ask an external model a question.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Send `prompt` and return the model's raw text reply.
    async fn ask(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Whether the gateway can serve requests at all.
    async fn health_check(&self) -> Result<(), GatewayError>;
}

/// Prompt for a question that must be answered with a single word.
pub fn build_prompt(question: &str) -> String {
    format!("{}{}", question, ONE_WORD_INSTRUCTION)
}
