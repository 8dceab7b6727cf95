//! Client configuration. The service base URL is injected here, never hard-coded in the adapter.

use serde::{Deserialize, Serialize};

/// Env var that overrides `api.base_url` after the file is loaded.
pub const API_URL_ENV: &str = "HEARTRISK_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prediction service endpoints
    pub api: ApiConfig,
    /// Score bands the service uses to pick a label
    pub risk: RiskBands,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://host`
    pub base_url: String,
    pub health_path: String,
    pub predict_path: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBands {
    /// Score (percent) at or above this is labelled high risk
    pub high_threshold: f64,
    /// Score (percent) at or above this is labelled medium risk
    pub medium_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            risk: RiskBands::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://mskjdn.pythonanywhere.com".to_string(),
            health_path: "/health".to_string(),
            predict_path: "/predict".to_string(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            high_threshold: 20.0,
            medium_threshold: 9.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ApiConfig {
    pub fn health_url(&self) -> String {
        self.join(&self.health_path)
    }

    pub fn predict_url(&self) -> String {
        self.join(&self.predict_path)
    }

    fn join(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

impl ClientConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ClientConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }

    /// Apply `HEARTRISK_API_URL` if set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        self
    }
}
