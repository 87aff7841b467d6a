//! Error types for the preference store

use thiserror::Error;

/// Type alias for Results using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Main error type for preference store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Host configuration is unusable at namespace open
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The namespace document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Host-specific backend failure
    #[error("Backend error: {0}")]
    Backend(String),

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Check if the error originated in the host's I/O layer
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }

    /// Check if the error is a configuration problem
    pub fn is_config(&self) -> bool {
        matches!(self, StoreError::Config(_))
    }
}

// Implement From for common error types
impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError::Other(s)
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
