use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::DispatchError;
use crate::models::ResponseEnvelope;
use crate::startup::AppState;

/// `POST /bfhl`: the single business endpoint.
///
/// Every outcome, including an unparsable body, is answered with an
/// envelope. Success is wrapped here and nowhere else.
#[tracing::instrument(skip(state, payload))]
pub async fn handle_bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseEnvelope>), DispatchError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            DispatchError::PayloadTooLarge
        } else {
            DispatchError::MalformedRequest
        }
    })?;

    let data = state.dispatcher.handle(&body).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseEnvelope::success(
            state.config.official_email.clone(),
            data,
        )),
    ))
}

/// Any method other than POST on `/bfhl`.
pub async fn method_not_allowed() -> DispatchError {
    DispatchError::MethodNotAllowed
}
