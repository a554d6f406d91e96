//! Domain error types
//!
//! This module defines the error hierarchy for the exporter.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Oracle-related errors
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// The oracle has not produced entropy for the requested batch yet
    #[error("No entropy available for batch {batch}; the VRF request may not be fulfilled yet")]
    EntropyNotAvailable { batch: u64 },

    /// Hex payload could not be turned into values
    #[error("Decode error: {0}")]
    Decode(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Oracle-specific errors
///
/// Errors that occur when reading from the JSON-RPC node.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum OracleError {
    /// Failed to reach the RPC node
    #[error("Failed to connect to RPC node: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status
    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    /// JSON-RPC error object returned by the node
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response body or ABI payload is malformed
    #[error("Invalid response from RPC node: {0}")]
    InvalidResponse(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl ExportError {
    /// Whether the failure came from talking to the RPC node
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            ExportError::Oracle(OracleError::ConnectionFailed(_))
                | ExportError::Oracle(OracleError::Timeout(_))
                | ExportError::Oracle(OracleError::Http { .. })
        )
    }
}
