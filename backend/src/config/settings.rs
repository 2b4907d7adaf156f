use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Automation intake that every inbound webhook is forwarded to.
    pub webhook_forward_url: Url,
    pub bind_addr: SocketAddr,
    pub relay_timeout: Duration,
    /// Built frontend (trunk `dist/`). Not served when unset.
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // empty values count as unset, the same as a missing line in .env
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = get("WEBHOOK_FORWARD_URL").ok_or(ConfigError::Missing("WEBHOOK_FORWARD_URL"))?;
        let webhook_forward_url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::Invalid {
            key: "WEBHOOK_FORWARD_URL",
            reason: e.to_string(),
        })?;
        if !matches!(webhook_forward_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                key: "WEBHOOK_FORWARD_URL",
                reason: format!("unsupported scheme '{}'", webhook_forward_url.scheme()),
            });
        }

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let relay_timeout_secs = match get("RELAY_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "RELAY_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_RELAY_TIMEOUT_SECS,
        };
        if relay_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "RELAY_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Settings {
            webhook_forward_url,
            bind_addr,
            relay_timeout: Duration::from_secs(relay_timeout_secs),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}
