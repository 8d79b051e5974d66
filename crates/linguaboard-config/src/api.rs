//! API connection configuration.
//!
//! # Environment Variables
//!
//! - `LINGUABOARD_API_BASE_URL`: Backend origin (default: `http://localhost:3001`)
//! - `LINGUABOARD_TIMEOUT_SECS`: Per-request timeout in seconds (default: `30`)
//! - `LINGUABOARD_WITH_CREDENTIALS`: Keep cookies across requests (default: `true`)
//! - `LINGUABOARD_USER_AGENT`: User agent sent with every request
//!
//! Endpoint paths already start with `/api`, so the base URL is the bare
//! origin of the backend.

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL not configured")]
    MissingBaseUrl,

    #[error("API base URL '{0}' must start with http:// or https://")]
    UnsupportedScheme(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    /// Mirror of the browser's `credentials: include`: persist cookies the
    /// backend sets and send them back.
    pub with_credentials: bool,
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let base_url = env::var("LINGUABOARD_API_BASE_URL")
            .map(normalize_base_url)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            timeout: Duration::from_secs(
                env::var("LINGUABOARD_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            with_credentials: env::var("LINGUABOARD_WITH_CREDENTIALS")
                .ok()
                .map(|v| parse_bool(&v))
                .unwrap_or(true),
            user_agent: env::var("LINGUABOARD_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks that the base URL is usable before any request is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(self.base_url.clone()));
        }
        Ok(())
    }

    /// Location of the backend's Swagger UI.
    #[must_use]
    pub fn docs_url(&self) -> String {
        format!("{}/api-docs", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            with_credentials: true,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    concat!("linguaboard/", env!("CARGO_PKG_VERSION")).to_string()
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
