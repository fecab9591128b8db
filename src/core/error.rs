//! Error types and error handling for the heroes API.
//!
//! This module defines the error types used throughout the
//! application. HTTP status mapping lives in the http adapter.

use thiserror::Error;

/// Result type alias for heroes API operations
pub type Result<T> = std::result::Result<T, HeroesError>;

/// Main error type for the heroes API
#[derive(Error, Debug)]
pub enum HeroesError {
    /// Caller-supplied page token is not an integer
    #[error("{0}")]
    InvalidInput(String),

    /// Requested page is outside the catalogue
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid catalogue: {0}")]
    InvalidCatalogue(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl HeroesError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, HeroesError::NotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, HeroesError::InvalidInput(_))
    }
}
