//! Error types for the gstd client
//!
//! Transport failures are terminal for the single request that hit them;
//! nothing here is retried internally.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gstd client
#[derive(Error, Debug)]
pub enum Error {
    // === Transport Errors ===
    #[error("Connection error: {0}")]
    Connection(#[source] io::Error),

    #[error("Response too long: exceeded limit of {limit} bytes (received {received})")]
    ResponseTooLarge { limit: usize, received: usize },

    #[error("Server took too long to respond (waited {} ms)", .0.as_millis())]
    Timeout(Duration),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a response too large error
    pub fn response_too_large(limit: usize, received: usize) -> Self {
        Self::ResponseTooLarge { limit, received }
    }

    /// Connection closed by the peer before the terminator arrived
    pub fn closed_before_terminator(received: usize) -> Self {
        Self::Connection(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("daemon closed the connection after {received} bytes without a terminator"),
        ))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub fn is_response_too_large(&self) -> bool {
        matches!(self, Self::ResponseTooLarge { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Connection(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_mentions_server() {
        let err = Error::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "Server took too long to respond (waited 250 ms)");
        assert!(err.is_timeout());
    }

    #[test]
    fn test_io_errors_map_to_connection() {
        let err: Error = io::Error::new(io::ErrorKind::ConnectionRefused, "refused").into();
        assert!(err.is_connection());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_closed_before_terminator_is_unexpected_eof() {
        match Error::closed_before_terminator(3) {
            Error::Connection(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
