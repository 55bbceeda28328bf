use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Plain data: loading, layering and defaults live in the infra layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log: LogConfig,
}

/// How to reach the spider API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is joined to, e.g. `http://localhost:8000/api`
    pub base_url: String,

    /// Sent as the `Authorization` header when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Whole-request timeout enforced by the transport
    pub timeout_secs: u64,

    /// Page size used by `list` when none is given
    pub page_size: u32,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,

    /// Also write logs to this file when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            token: None,
            timeout_secs: 30,
            page_size: 10,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
