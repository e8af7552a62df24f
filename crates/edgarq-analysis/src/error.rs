//! Error types for content analysis

use thiserror::Error;

/// Errors that can occur while setting up the analyzers
///
/// Scanning itself never fails; only configuration can be rejected.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
