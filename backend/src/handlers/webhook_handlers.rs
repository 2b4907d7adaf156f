use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::api::automation;
use crate::error::RelayError;
use crate::AppState;

pub const FAILURE_MESSAGE: &str = "Failed to process webhook";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WebhookResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebhookResponse {
    pub fn success() -> Self {
        WebhookResponse {
            success: true,
            message: None,
        }
    }

    pub fn failure() -> Self {
        WebhookResponse {
            success: false,
            message: Some(FAILURE_MESSAGE.to_string()),
        }
    }
}

/// Only "is a JSON object" is checked; the shape is the automation side's concern.
pub fn parse_payload(body: &[u8]) -> Result<Map<String, Value>, RelayError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Err(RelayError::NotAnObject("array")),
        Value::String(_) => Err(RelayError::NotAnObject("string")),
        Value::Number(_) => Err(RelayError::NotAnObject("number")),
        Value::Bool(_) => Err(RelayError::NotAnObject("boolean")),
        Value::Null => Err(RelayError::NotAnObject("null")),
    }
}

pub async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<WebhookResponse>, RelayError> {
    // oversized or unreadable bodies get the same failure reply as bad JSON
    let body = body?;
    let payload = parse_payload(&body)?;
    tracing::info!("Received webhook payload with {} field(s)", payload.len());

    let enriched = automation::enrich(payload, Utc::now());
    state.automation.forward(&enriched).await?;

    tracing::info!("Webhook relayed to {}", state.automation.url());
    Ok(Json(WebhookResponse::success()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_payload_accepts_objects() {
        let map = parse_payload(br#"{"name":"Ada","nested":{"x":[1,2]}}"#).expect("object");
        assert_eq!(map["name"], json!("Ada"));
        assert_eq!(map["nested"], json!({"x": [1, 2]}));
    }

    #[test]
    fn parse_payload_rejects_invalid_json() {
        assert!(matches!(
            parse_payload(b"{not json"),
            Err(RelayError::MalformedPayload(_))
        ));
        assert!(matches!(parse_payload(b""), Err(RelayError::MalformedPayload(_))));
    }

    #[test]
    fn parse_payload_rejects_non_objects() {
        assert!(matches!(parse_payload(b"[1,2]"), Err(RelayError::NotAnObject("array"))));
        assert!(matches!(parse_payload(b"\"hi\""), Err(RelayError::NotAnObject("string"))));
        assert!(matches!(parse_payload(b"null"), Err(RelayError::NotAnObject("null"))));
    }

    #[test]
    fn failure_body_matches_public_contract() {
        assert_eq!(
            serde_json::to_value(WebhookResponse::failure()).unwrap(),
            json!({"success": false, "message": "Failed to process webhook"})
        );
        assert_eq!(
            serde_json::to_value(WebhookResponse::success()).unwrap(),
            json!({"success": true})
        );
    }
}
