//! Deterministic gateway for tests and keyless local runs.

use super::{AiGateway, GatewayError};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Behaviour {
    Reply(String),
    Fail,
    Stall(Duration),
}

/// Mock gateway returning a canned reply, a failure, or never answering
/// within the caller's deadline.
pub struct MockAiGateway {
    behaviour: Behaviour,
}

impl MockAiGateway {
    /// Always answer with `reply`, whatever the prompt.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            behaviour: Behaviour::Reply(reply.into()),
        }
    }

    /// Always fail as if the upstream API returned an error.
    pub fn failing() -> Self {
        Self {
            behaviour: Behaviour::Fail,
        }
    }

    /// Sleep for `delay` before answering.
    pub fn stalling(delay: Duration) -> Self {
        Self {
            behaviour: Behaviour::Stall(delay),
        }
    }
}

#[async_trait]
impl AiGateway for MockAiGateway {
    async fn ask(&self, prompt: &str) -> Result<String, GatewayError> {
        match &self.behaviour {
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::Fail => Err(GatewayError::ApiError(
                "Mock gateway configured to fail".to_string(),
            )),
            Behaviour::Stall(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(format!("Late reply to: {}", prompt))
            }
        }
    }

    async fn health_check(&self) -> Result<(), GatewayError> {
        match self.behaviour {
            Behaviour::Fail => Err(GatewayError::NotConfigured(
                "Mock gateway configured to fail".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
