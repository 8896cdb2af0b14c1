//! # Client configuration: `akkor.toml`
//!
//! The web build embeds an `akkor.toml` next to the crate and parses it at
//! start-up. Every field has a default, so an empty document is the default
//! configuration.
//!
//! ```toml
//! [api]
//! base_url = "https://akkorhotel-api.up.railway.app"
//! timeout_secs = 30        # 0 disables the client-side timeout
//! max_retries = 2          # extra attempts for idempotent GETs only
//! retry_backoff_ms = 250   # doubled after each failed attempt
//!
//! [search]
//! page_size = 10
//!
//! [log]
//! level = "info"
//! ```
//!
//! A compile-time `AKKOR_API_URL` overrides `api.base_url`
//! (see [`ClientConfig::with_env_overrides`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://akkorhotel-api.up.railway.app";

/// Top-level configuration stored in `akkor.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra attempts for idempotent requests. 0 means single attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    250
}

fn default_page_size() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ApiConfig {
    /// `None` when the timeout is disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "akkor.toml"
    }

    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Apply `AKKOR_API_URL` if it was set when the crate was compiled.
    pub fn with_env_overrides(self) -> Self {
        match option_env!("AKKOR_API_URL") {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
