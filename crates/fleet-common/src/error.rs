//! Error types for Fleet Builder
//!
//! Pricing itself never fails. These errors cover the edges around it:
//! reading requests, decoding JSON, loading configuration, writing output.

use thiserror::Error;

/// Result type alias using FleetError
pub type Result<T> = std::result::Result<T, FleetError>;

/// Unified error type for Fleet Builder operations
#[derive(Debug, Error)]
pub enum FleetError {
    // Request decoding errors
    #[error("Invalid quote request: {0}")]
    InvalidRequest(String),

    // Input/output errors
    #[error("I/O error: {0}")]
    Io(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// Implement From for common external error types
impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        FleetError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for FleetError {
    fn from(err: std::io::Error) -> Self {
        FleetError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FleetError::Config("FLEET_QUOTE_FORMAT=xml".to_string());
        assert!(err.to_string().contains("FLEET_QUOTE_FORMAT=xml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: FleetError = io_err.into();
        assert!(matches!(err, FleetError::Io(ref msg) if msg.contains("stdin closed")));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FleetError = json_err.into();
        assert!(matches!(err, FleetError::Serialization(_)));
    }
}
