//! EDGAR client configuration

use crate::SecError;
use serde::{Deserialize, Serialize};

/// Default submissions API host
pub const DEFAULT_BASE_URL: &str = "https://data.sec.gov";

/// Default host for filing documents
pub const DEFAULT_ARCHIVE_BASE_URL: &str = "https://www.sec.gov";

/// Default User-Agent; EDGAR rejects requests without a contact string
pub const DEFAULT_USER_AGENT: &str = "edgarq/0.1 (admin@example.com)";

/// Configuration for the EDGAR client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecConfig {
    /// Submissions API base URL
    pub base_url: String,

    /// Base URL that filing documents are served from
    pub archive_base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Pause before each outbound request, in milliseconds
    pub rate_limit_delay_ms: u64,

    /// Rows taken from `filings.recent` before the form filter
    pub max_recent: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SecConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            archive_base_url: DEFAULT_ARCHIVE_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            rate_limit_delay_ms: 100,
            max_recent: 10,
            timeout_secs: 30,
        }
    }
}

impl SecConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("base_url", &self.base_url),
            ("archive_base_url", &self.archive_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.max_recent == 0 {
            return Err("max_recent must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, SecError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| SecError::Config(e.to_string()))?;
        config.validate().map_err(SecError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
