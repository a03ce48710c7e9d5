use std::env;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;

pub mod api;

fn default_log_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    /// `tracing` env-filter directive used by the binary
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Build from environment variables, falling back to defaults
    pub fn new() -> Self {
        let log_filter = env::var("UDICT_LOG").unwrap_or_else(|_| default_log_filter());

        Config {
            api: ApiConfig::from_env(),
            log_filter,
        }
    }

    pub fn from_json_str(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    /// Load a JSON config file; absent fields take their defaults
    pub fn load(path: &Path) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
