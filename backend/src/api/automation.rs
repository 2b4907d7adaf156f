use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde_json::{Map, Value};
use url::Url;

use crate::error::RelayError;

/// Tag added to every forwarded payload so the automation side can tell
/// website submissions apart from its other intakes.
pub const WEBHOOK_SOURCE: &str = "website_api_webhook";

/// Adds `source` and `timestamp` to the caller's payload. Relay fields win
/// over caller fields with the same name.
pub fn enrich(mut payload: Map<String, Value>, now: DateTime<Utc>) -> Map<String, Value> {
    payload.insert("source".to_string(), Value::String(WEBHOOK_SOURCE.to_string()));
    payload.insert(
        "timestamp".to_string(),
        Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    payload
}

#[derive(Clone)]
pub struct AutomationClient {
    client: Client,
    url: Url,
}

impl AutomationClient {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(AutomationClient { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// One POST, no retries. Anything outside 2xx is a failure.
    pub async fn forward(&self, payload: &Map<String, Value>) -> Result<(), RelayError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Automation endpoint accepted payload with {}", status);
            Ok(())
        } else {
            Err(RelayError::UpstreamStatus(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn enrich_adds_source_and_millisecond_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let enriched = enrich(object(json!({"a": 1})), now);

        assert_eq!(
            Value::Object(enriched),
            json!({
                "a": 1,
                "source": "website_api_webhook",
                "timestamp": "2024-03-05T14:07:09.000Z"
            })
        );
    }

    #[test]
    fn enrich_overrides_caller_supplied_relay_fields() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let enriched = enrich(
            object(json!({"source": "spoofed", "timestamp": "yesterday", "name": "Ada"})),
            now,
        );

        assert_eq!(enriched["source"], json!(WEBHOOK_SOURCE));
        assert_eq!(enriched["timestamp"], json!("2024-01-01T00:00:00.000Z"));
        assert_eq!(enriched["name"], json!("Ada"));
    }

    #[test]
    fn timestamp_parses_back_as_rfc3339() {
        let enriched = enrich(Map::new(), Utc::now());
        let raw = enriched["timestamp"].as_str().expect("string timestamp");
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
        assert!(raw.ends_with('Z'));
    }
}
