use gloo_console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::fault_boundary::use_fault_reporter;
use crate::config;
use crate::forms::Submission;

#[derive(Deserialize)]
struct WebhookResponse {
    success: bool,
    message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum SubmitError {
    /// The request could not be built. Indicates a bug, not a user mistake.
    Encode(String),
    /// Network or relay failure; shown to the visitor as-is.
    Failed(String),
}

pub const GENERIC_FAILURE: &str = "We couldn't send that just now. Please try again, or call us.";

/// Posts a submission through the site's webhook relay.
pub async fn submit(submission: &Submission) -> Result<(), SubmitError> {
    let request = Request::post(&format!("{}/api/webhook", config::get_backend_url()))
        .json(submission)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    match request.send().await {
        Ok(response) => match response.json::<WebhookResponse>().await {
            Ok(body) if response.ok() && body.success => Ok(()),
            Ok(body) => {
                log!("Webhook relay refused submission:", body.message.unwrap_or_default());
                Err(SubmitError::Failed(GENERIC_FAILURE.to_string()))
            }
            Err(e) => {
                log!("Unreadable webhook response:", e.to_string());
                Err(SubmitError::Failed(GENERIC_FAILURE.to_string()))
            }
        },
        Err(e) => {
            log!("Network error:", e.to_string());
            Err(SubmitError::Failed(GENERIC_FAILURE.to_string()))
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Validates and sends a submission, tracking progress for the form that
/// owns it. Encoding failures are bugs, so they also go to the fault boundary.
#[hook]
pub fn use_submitter() -> (UseStateHandle<SendStatus>, Callback<Submission>) {
    let status = use_state(|| SendStatus::Idle);
    let reporter = use_fault_reporter();

    let send = {
        let status = status.clone();
        Callback::from(move |submission: Submission| {
            if *status == SendStatus::Sending {
                return;
            }
            if let Err(message) = submission.validate() {
                status.set(SendStatus::Failed(message));
                return;
            }
            status.set(SendStatus::Sending);
            let status = status.clone();
            let reporter = reporter.clone();
            spawn_local(async move {
                match submit(&submission).await {
                    Ok(()) => status.set(SendStatus::Sent),
                    Err(SubmitError::Failed(message)) => status.set(SendStatus::Failed(message)),
                    Err(SubmitError::Encode(detail)) => {
                        status.set(SendStatus::Failed(GENERIC_FAILURE.to_string()));
                        if let Some(reporter) = reporter {
                            reporter.report(format!("submission could not be encoded: {}", detail));
                        }
                    }
                }
            });
        })
    };

    (status, send)
}
