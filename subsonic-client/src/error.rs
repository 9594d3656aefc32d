//! Error types for the Subsonic transport

use thiserror::Error;

/// Errors that can occur while talking to a Subsonic server
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The response body could not be decoded into a Subsonic envelope
    #[error("Response parsing error: {0}")]
    Parse(String),

    /// The server answered with `status: "failed"`
    #[error("Subsonic error {code}: {message}")]
    Fault { code: i32, message: String },

    /// Credentials could not be prepared for the request
    #[error("Authentication error: {0}")]
    Auth(String),
}

/// Errors raised while building a [`ClientConfig`](crate::ClientConfig)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// The server URL is empty or has an unsupported scheme
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Unknown authentication mode name
    #[error("Invalid authentication mode '{0}', expected 'token' or 'plain'")]
    InvalidAuthMode(String),
}
