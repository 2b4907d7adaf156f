use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::handlers::webhook_handlers::WebhookResponse;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Everything that can go wrong between receiving a webhook and hearing back
/// from the automation endpoint. Callers only ever see the generic message.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not read request body: {0}")]
    Body(#[from] BytesRejection),
    #[error("payload is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("forwarding request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("automation endpoint responded with {0}")]
    UpstreamStatus(reqwest::StatusCode),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::Body(_) | RelayError::MalformedPayload(_) | RelayError::NotAnObject(_) => {
                tracing::warn!("Rejected webhook payload: {}", self);
            }
            RelayError::Transport(_) | RelayError::UpstreamStatus(_) => {
                tracing::error!("Failed to relay webhook: {}", self);
            }
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(WebhookResponse::failure()),
        )
            .into_response()
    }
}
