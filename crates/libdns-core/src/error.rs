//! Error types for libdns providers
//!
//! This module defines the error type shared by the abstraction and every
//! provider implementation.

use thiserror::Error;

/// Result type alias for libdns operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for libdns providers
#[derive(Error, Debug)]
pub enum Error {
    /// No provider-side zone matches the requested zone name
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    /// More than one provider-side zone matches the requested zone name
    #[error("Ambiguous zone: {0}")]
    AmbiguousZone(String),

    /// The record carries no provider-assigned identifier
    #[error("Record identity missing: {0}")]
    RecordIdentityMissing(String),

    /// A provider API call failed
    #[error("Provider error ({provider}): {operation}: {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// The operation that failed (e.g. "could not list domains")
        operation: String,
        /// Error message
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Capability not implemented by the provider
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a "zone not found" error
    pub fn zone_not_found(zone: impl Into<String>) -> Self {
        Self::ZoneNotFound(zone.into())
    }

    /// Create an "ambiguous zone" error
    pub fn ambiguous_zone(zone: impl Into<String>) -> Self {
        Self::AmbiguousZone(zone.into())
    }

    /// Create a "record identity missing" error
    pub fn identity_missing(msg: impl Into<String>) -> Self {
        Self::RecordIdentityMissing(msg.into())
    }

    /// Create a provider API error with the failed operation attached
    pub fn provider(
        provider: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Provider {
            provider: provider.into(),
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an "unsupported operation" error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
