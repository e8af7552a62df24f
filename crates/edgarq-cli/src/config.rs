//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use edgarq_query::ProcessorConfig;
use edgarq_sec::SecConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `sec.user_agent`.
pub const USER_AGENT_ENV: &str = "EDGARQ_USER_AGENT";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// EDGAR client settings
    #[serde(default)]
    pub sec: SecConfig,

    /// Query pipeline settings
    #[serde(default)]
    pub processor: ProcessorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Default configuration file path (`~/.edgarq/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".edgarq").join("config.toml"))
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file doesn't exist, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.override_user_agent(std::env::var(USER_AGENT_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Replace the User-Agent when a non-blank override is given.
    pub fn override_user_agent(&mut self, user_agent: Option<String>) {
        if let Some(agent) = user_agent.filter(|a| !a.trim().is_empty()) {
            self.sec.user_agent = agent;
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.sec
            .validate()
            .map_err(|e| CliError::Config(format!("[sec] {}", e)))?;
        self.processor
            .validate()
            .map_err(|e| CliError::Config(format!("[processor] {}", e)))?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
