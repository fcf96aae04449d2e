//! Connection settings for the remote metadata service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

/// Default metadata service host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default metadata service port.
pub const DEFAULT_PORT: u16 = 50051;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HTTP metadata backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Base URL of the metadata service, without a trailing slash.
    pub base_url: String,
    /// Timeout for a single region lookup.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("genome-gateway/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl MetadataConfig {
    /// Read configuration from the process environment.
    ///
    /// - `METADATA_URL` - full base URL; takes precedence over host/port
    /// - `METADATA_HOST` / `METADATA_PORT` - host and port (default `localhost:50051`)
    /// - `METADATA_TIMEOUT_SECS` - lookup timeout in seconds (default 10)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("METADATA_URL").filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url);
        } else {
            let host = lookup("METADATA_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
            let port = match lookup("METADATA_PORT") {
                Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                    GatewayError::Config(format!("METADATA_PORT is not a valid port: '{}'", raw))
                })?,
                None => DEFAULT_PORT,
            };
            config.base_url = format!("http://{}:{}", host.trim(), port);
        }

        if let Some(raw) = lookup("METADATA_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                GatewayError::Config(format!(
                    "METADATA_TIMEOUT_SECS is not a whole number of seconds: '{}'",
                    raw
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Override the lookup timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
