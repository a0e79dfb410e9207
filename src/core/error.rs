//! Error types and error handling for the primegen service.
//!
//! This module defines the error types used throughout the
//! application. HTTP response mapping lives in the `http` adapter.

use thiserror::Error;

use crate::core::limit::LimitError;

/// Result type alias for primegen operations
pub type Result<T> = std::result::Result<T, PrimegenError>;

/// Main error type for the primegen service
#[derive(Error, Debug)]
pub enum PrimegenError {
    #[error(transparent)]
    InvalidLimit(#[from] LimitError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Prime generation failed: {0}")]
    GenerationFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PrimegenError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a rejected generation limit
    pub fn is_invalid_limit(&self) -> bool {
        matches!(self, PrimegenError::InvalidLimit(_))
    }

    /// Check if this is a bad request error (invalid configuration)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, PrimegenError::ConfigError(_))
    }
}
