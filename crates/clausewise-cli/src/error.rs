//! Error types for the CLI application.

use clausewise_analyzer::AnalyzerError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Contract path does not reference an existing file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Text extraction failed
    #[error("Could not extract text: {0}")]
    Extraction(String),

    /// Analyzer error
    #[error("Analysis error: {0}")]
    Analyzer(#[from] AnalyzerError),

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
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::Toml(_) | CliError::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}
