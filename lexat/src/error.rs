//! Error handling module for the lexat CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the lexat CLI application.
#[derive(Error, Debug)]
pub enum LexatError {
    /// Error when the configuration cannot be found or used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when the scanner section of a configuration is invalid.
    #[error(transparent)]
    ScannerConfig(#[from] lexa_scan::ConfigError),

    /// Error when an input file cannot be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when a file would be overwritten without `--force`.
    #[error("Refusing to overwrite existing file: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Error when scanning found lexical errors.
    #[error("{errors} lexical error(s) in {files} file(s)")]
    LexicalErrors {
        /// Total error tokens.
        errors: usize,
        /// Files with at least one error.
        files: usize,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when TOML serialization fails.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result type alias using LexatError.
pub type Result<T> = std::result::Result<T, LexatError>;
