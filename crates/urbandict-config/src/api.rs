use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.urbandictionary.com/v0".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_min_interval_ms() -> u64 {
    1_000
}

fn default_user_agent() -> String {
    format!("urbandict/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for talking to the remote dictionary service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root, endpoints are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Minimum spacing between the start of two outbound calls
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            min_interval_ms: default_min_interval_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("UDICT_BASE_URL").unwrap_or_else(|_| default_base_url());

        let timeout_ms = env::var("UDICT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_ms);

        let min_interval_ms = env::var("UDICT_MIN_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_interval_ms);

        Self {
            base_url,
            timeout_ms,
            min_interval_ms,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    pub fn define_url(&self) -> String {
        format!("{}/define", self.base_url.trim_end_matches('/'))
    }

    pub fn random_url(&self) -> String {
        format!("{}/random", self.base_url.trim_end_matches('/'))
    }
}
