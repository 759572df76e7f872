use crate::models::ResponseEnvelope;
use crate::services::numeric::NumericError;
use crate::services::providers::GatewayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Every way a `/bfhl` request can fail.
///
/// Rendered as a `{"is_success": false}` envelope; upstream and internal
/// causes are logged, never returned.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Malformed request")]
    MalformedRequest,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("AI service failed: {0}")]
    UpstreamFailure(#[from] GatewayError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<NumericError> for DispatchError {
    fn from(err: NumericError) -> Self {
        DispatchError::InvalidPayload(err.to_string())
    }
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::MalformedRequest | DispatchError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            DispatchError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            DispatchError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            DispatchError::UpstreamFailure(_) | DispatchError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Caller-facing message; `None` for malformed bodies.
    pub fn public_message(&self) -> Option<String> {
        match self {
            DispatchError::MalformedRequest => None,
            DispatchError::InvalidPayload(msg) => Some(msg.clone()),
            DispatchError::MethodNotAllowed => Some("Method not allowed".to_string()),
            DispatchError::PayloadTooLarge => Some("Payload too large".to_string()),
            DispatchError::UpstreamFailure(_) => Some("AI service failed".to_string()),
            DispatchError::Internal(_) => Some("Internal server error".to_string()),
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::MalformedRequest => "malformed_request",
            DispatchError::InvalidPayload(_) => "invalid_payload",
            DispatchError::MethodNotAllowed => "method_not_allowed",
            DispatchError::PayloadTooLarge => "payload_too_large",
            DispatchError::UpstreamFailure(_) => "upstream_failure",
            DispatchError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(ResponseEnvelope::failure(self.public_message()))).into_response()
    }
}
