//! Query pipeline error types

use edgarq_analysis::AnalysisError;
use thiserror::Error;

/// Errors that can occur while building the query pipeline
///
/// Processing a question never fails; only setup can be rejected.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Analyzer configuration rejected
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}
