use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod settings;
}
mod handlers {
    pub mod webhook_handlers;
}
mod api {
    pub mod automation;
}
mod error;

use api::automation::AutomationClient;
use config::settings::Settings;
use handlers::webhook_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    settings: Settings,
    automation: AutomationClient,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        let automation = AutomationClient::new(
            settings.webhook_forward_url.clone(),
            settings.relay_timeout,
        )?;
        Ok(AppState { settings, automation })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/webhook", post(webhook_handlers::handle_webhook));

    // client-side routes (/webinar, /blog/...) resolve to index.html
    let app = match &state.settings.static_dir {
        Some(dir) => api_routes.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => api_routes,
    };

    app.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

/// Error reporting is off unless `SENTRY_DSN` is configured.
fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;
    let _guard = init_sentry(&settings);
    let bind_addr = settings.bind_addr;
    tracing::info!(
        "Relaying webhooks to {} (timeout {:?})",
        settings.webhook_forward_url,
        settings.relay_timeout
    );
    if let Some(dir) = &settings.static_dir {
        tracing::info!("Serving frontend from {}", dir.display());
    }

    let state = Arc::new(AppState::new(settings)?);
    let app = build_router(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{self, Body},
        extract::State,
        http::{header::CONTENT_TYPE, HeaderMap, Request, StatusCode},
        Json,
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;
    use tower::ServiceExt;
    use url::Url;

    type Received = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    #[derive(Clone)]
    struct FakeAutomation {
        status: StatusCode,
        delay: Duration,
        received: Received,
    }

    async fn intake(
        State(fake): State<FakeAutomation>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        fake.received.lock().await.push((content_type, body));
        tokio::time::sleep(fake.delay).await;
        fake.status
    }

    async fn spawn_automation(status: StatusCode, delay: Duration) -> (Url, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/intake", post(intake))
            .with_state(FakeAutomation {
                status,
                delay,
                received: received.clone(),
            });
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        let url = Url::parse(&format!("http://{addr}/intake")).expect("url");
        (url, received)
    }

    fn settings_for(url: Url) -> Settings {
        Settings {
            webhook_forward_url: url,
            bind_addr: "127.0.0.1:0".parse().expect("addr"),
            relay_timeout: Duration::from_secs(5),
            static_dir: None,
            sentry_dsn: None,
        }
    }

    fn test_app(settings: Settings) -> Router {
        build_router(Arc::new(AppState::new(settings).expect("state")))
    }

    fn webhook_request(body: &'static str) -> Request<Body> {
        Request::post("/api/webhook")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("request")
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let (url, _) = spawn_automation(StatusCode::OK, Duration::ZERO).await;
        let app = test_app(settings_for(url));

        let request = Request::get("/api/health").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert_eq!(body.as_ref(), b"OK");
    }

    #[tokio::test]
    async fn relays_enriched_payload_and_reports_success() {
        let (url, received) = spawn_automation(StatusCode::OK, Duration::ZERO).await;
        let app = test_app(settings_for(url));

        let response = app.oneshot(webhook_request(r#"{"a":1}"#)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"success": true}));

        let received = received.lock().await;
        assert_eq!(received.len(), 1);
        let (content_type, forwarded) = &received[0];
        assert_eq!(content_type.as_deref(), Some("application/json"));

        let forwarded = forwarded.as_object().expect("object");
        assert_eq!(forwarded.len(), 3);
        assert_eq!(forwarded["a"], json!(1));
        assert_eq!(forwarded["source"], json!("website_api_webhook"));
        let timestamp = forwarded["timestamp"].as_str().expect("timestamp string");
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn upstream_error_status_becomes_generic_failure() {
        let (url, received) =
            spawn_automation(StatusCode::SERVICE_UNAVAILABLE, Duration::ZERO).await;
        let app = test_app(settings_for(url));

        let response = app
            .oneshot(webhook_request(r#"{"name":"Ada"}"#))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "message": "Failed to process webhook"})
        );
        // exactly one attempt, no retry
        assert_eq!(received.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn invalid_json_fails_without_forwarding() {
        let (url, received) = spawn_automation(StatusCode::OK, Duration::ZERO).await;
        let app = test_app(settings_for(url));

        for body in ["{oops", "[1,2,3]", ""] {
            let response = app.clone().oneshot(webhook_request(body)).await.expect("response");
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                json_body(response).await,
                json!({"success": false, "message": "Failed to process webhook"})
            );
        }
        assert!(received.lock().await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_automation_endpoint_fails_gracefully() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let url = Url::parse(&format!("http://{addr}/intake")).expect("url");
        let app = test_app(settings_for(url));

        let response = app.oneshot(webhook_request(r#"{"a":1}"#)).await.expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "message": "Failed to process webhook"})
        );
    }

    #[tokio::test]
    async fn slow_automation_endpoint_times_out() {
        let (url, _) = spawn_automation(StatusCode::OK, Duration::from_secs(3)).await;
        let mut settings = settings_for(url);
        settings.relay_timeout = Duration::from_millis(200);
        let app = test_app(settings);

        let response = app.oneshot(webhook_request(r#"{"a":1}"#)).await.expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn oversized_body_gets_generic_failure_without_forwarding() {
        let (url, received) = spawn_automation(StatusCode::OK, Duration::ZERO).await;
        let app = test_app(settings_for(url));

        let payload = format!(r#"{{"a":"{}"}}"#, "x".repeat(3 * 1024 * 1024));
        let request = Request::post("/api/webhook")
            .header("content-type", "application/json")
            .body(Body::from(payload))
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"success": false, "message": "Failed to process webhook"})
        );
        assert!(received.lock().await.is_empty());
    }

    #[test]
    fn sentry_stays_off_without_a_configured_dsn() {
        let settings = settings_for(Url::parse("http://127.0.0.1:9/intake").expect("url"));
        assert!(init_sentry(&settings).is_none());
    }

    #[tokio::test]
    async fn unknown_client_routes_fall_back_to_index_html() {
        let dir = std::env::temp_dir().join(format!("relay-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("static dir");
        std::fs::write(dir.join("index.html"), "<html>site</html>").expect("index");

        let (url, _) = spawn_automation(StatusCode::OK, Duration::ZERO).await;
        let mut settings = settings_for(url);
        settings.static_dir = Some(dir.clone());
        let app = test_app(settings);

        let request = Request::get("/webinar").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert_eq!(body.as_ref(), b"<html>site</html>");

        let _ = std::fs::remove_dir_all(dir);
    }
}
