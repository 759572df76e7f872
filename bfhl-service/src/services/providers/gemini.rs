//! Gemini gateway implementation.
//!
//! Calls the `generateContent` REST method once per question. The reply's
//! first candidate's first text part is returned verbatim; post-processing
//! into a single word happens in [`crate::services::answer`].

use super::{AiGateway, GatewayError, FALLBACK_ANSWER};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini gateway configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    /// Base URL up to and including the API version, without trailing slash.
    pub api_base: String,
    pub timeout: Duration,
}

/// Gemini text gateway.
pub struct GeminiGateway {
    config: GeminiConfig,
    client: Client,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given model method. Contains the API key,
    /// so it must never be logged.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method,
            self.config.api_key
        )
    }

    fn map_send_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.config.timeout.as_millis())
        } else {
            // Strip the URL: it carries the API key.
            GatewayError::NetworkError(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn ask(&self, prompt: &str) -> Result<String, GatewayError> {
        if self.config.api_key.is_empty() {
            return Err(GatewayError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(GatewayError::RateLimited);
            }

            let error_text = response.text().await.unwrap_or_default();
            return Err(GatewayError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::ApiError(format!("Failed to parse response: {}", e)))?;

        Ok(api_response
            .first_text()
            .unwrap_or(FALLBACK_ANSWER)
            .to_string())
    }

    async fn health_check(&self) -> Result<(), GatewayError> {
        if self.config.api_key.is_empty() {
            Err(GatewayError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// First candidate's first part, if it holds non-empty text.
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
    }
}
