use subsonic_client::{ConfigError, TransportError};
use thiserror::Error;

use crate::operation::ValidationError;

/// High-level API errors for Subsonic list operations
///
/// Validation failures are reported before any request is sent. Transport
/// failures are passed through exactly as the transport produced them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Argument outside its allowed set
    ///
    /// Returned when an album list type is not one of the ten known
    /// orderings. The message names the offending value and links to the
    /// getAlbumList documentation.
    #[error("{0}")]
    InvalidArgument(String),

    /// Conditionally required parameter is absent
    ///
    /// `fromYear`/`toYear` for `byYear` lists, `genre` for `byGenre` lists.
    /// `operation` reads like "getAlbumList byYear".
    #[error("Required argument {parameter} was not found when using {operation}")]
    MissingRequiredParameter { operation: String, parameter: String },

    /// Failure reported by the transport, untouched
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Client configuration rejected while connecting
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from ValidationError to ApiError
impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::InvalidListType { .. } => ApiError::InvalidArgument(error.to_string()),
            ValidationError::MissingParameter {
                operation,
                list_type,
                parameter,
            } => ApiError::MissingRequiredParameter {
                operation: format!("{} {}", operation, list_type),
                parameter: parameter.to_string(),
            },
        }
    }
}
