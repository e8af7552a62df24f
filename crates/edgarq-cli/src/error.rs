//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Analyzer setup error
    #[error(transparent)]
    Analysis(#[from] edgarq_analysis::AnalysisError),

    /// Query pipeline setup error
    #[error(transparent)]
    Query(#[from] edgarq_query::QueryError),

    /// EDGAR client error
    #[error("EDGAR error: {0}")]
    Sec(#[from] edgarq_sec::SecError),
}
