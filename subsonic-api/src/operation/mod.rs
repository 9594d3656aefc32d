//! Operation framework shared by every endpoint
//!
//! An operation is a zero-sized type tying together:
//! - a request type that knows how to validate itself,
//! - the endpoint it targets,
//! - how the final parameter set is assembled,
//! - which part of the response envelope is returned to the caller.
//!
//! [`SubsonicApi::execute`](crate::SubsonicApi::execute) drives the
//! validate → merge → delegate → project pipeline for any operation.

pub mod macros;

use subsonic_client::Response;

use crate::endpoint::Endpoint;
use crate::list_type::ListType;
use crate::params::Parameters;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("List type {value} is invalid, see {}", Endpoint::AlbumList.docs_url())]
    InvalidListType { value: String },

    #[error("Required argument {parameter} was not found when using {operation} {list_type}")]
    MissingParameter {
        operation: &'static str,
        list_type: &'static str,
        parameter: &'static str,
    },
}

/// Trait for request types that check their own arguments
pub trait Validate {
    /// Reject the request before anything is sent
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(()) // Default: nothing to check
    }
}

/// Base trait for all Subsonic list operations
pub trait SubsonicOperation {
    /// The request data for this operation
    type Request: Validate;

    /// What the caller gets back, projected out of the envelope
    type Response;

    /// The REST endpoint this operation calls
    const ENDPOINT: Endpoint;

    /// Validate the request and assemble the parameters to send
    ///
    /// # Returns
    /// The parameter set, `None` when the endpoint is called without any,
    /// or the first validation failure
    fn build_parameters(request: &Self::Request) -> Result<Option<Parameters>, ValidationError>;

    /// Pull this operation's section out of the response envelope
    fn extract(response: Response) -> Self::Response;

    /// Get human-readable operation metadata
    fn metadata() -> OperationMetadata {
        OperationMetadata {
            endpoint: Self::ENDPOINT.name(),
        }
    }
}

/// Metadata about an operation, used for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationMetadata {
    /// The endpoint name (e.g., "getAlbumList2")
    pub endpoint: &'static str,
}

/// Album list rules shared by getAlbumList and getAlbumList2
///
/// The list type must be a known ordering, and orderings with required
/// parameters (`byYear`, `byGenre`) must find them in `parameters`.
pub fn validate_album_list(
    endpoint: Endpoint,
    list_type: &str,
    parameters: Option<&Parameters>,
) -> Result<ListType, ValidationError> {
    let parsed: ListType = list_type.parse()?;

    for parameter in parsed.required_parameters() {
        let present = parameters.is_some_and(|p| p.contains_key(*parameter));
        if !present {
            return Err(ValidationError::MissingParameter {
                operation: endpoint.name(),
                list_type: parsed.as_str(),
                parameter: *parameter,
            });
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::params;

    #[test]
    fn test_invalid_list_type_message() {
        let err = validate_album_list(Endpoint::AlbumList, "popular", None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("popular"));
        assert!(message.contains("api.jsp#getAlbumList"));
    }

    #[test]
    fn test_invalid_list_type_links_album_list_docs() {
        let err = validate_album_list(Endpoint::AlbumList2, "loudest", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("List type loudest is invalid, see {}", Endpoint::AlbumList.docs_url())
        );
        assert!(err
            .to_string()
            .ends_with("http://www.subsonic.org/pages/api.jsp#getAlbumList"));
    }

    #[test]
    fn test_by_year_checks_from_year_first() {
        let err = validate_album_list(Endpoint::AlbumList2, "byYear", None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingParameter {
                operation: "getAlbumList2",
                list_type: "byYear",
                parameter: "fromYear",
            }
        );
        assert_eq!(
            err.to_string(),
            "Required argument fromYear was not found when using getAlbumList2 byYear"
        );
    }

    #[test]
    fn test_by_year_missing_to_year() {
        let parameters = params([("fromYear", "1990")]);
        let err =
            validate_album_list(Endpoint::AlbumList, "byYear", Some(&parameters)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingParameter { parameter: "toYear", .. }
        ));
    }

    #[test]
    fn test_by_genre_requires_genre() {
        let parameters = params([("size", "10")]);
        let err =
            validate_album_list(Endpoint::AlbumList, "byGenre", Some(&parameters)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingParameter { parameter: "genre", .. }
        ));

        let parameters = params([("genre", "Rock")]);
        assert_eq!(
            validate_album_list(Endpoint::AlbumList, "byGenre", Some(&parameters)),
            Ok(ListType::ByGenre)
        );
    }

    #[test]
    fn test_other_list_types_need_nothing() {
        for list_type in ListType::ALL {
            if list_type.required_parameters().is_empty() {
                assert_eq!(
                    validate_album_list(Endpoint::AlbumList2, list_type.as_str(), None),
                    Ok(list_type)
                );
            }
        }
    }

    #[test]
    fn test_metadata() {
        struct Probe;
        struct ProbeRequest;
        impl Validate for ProbeRequest {}
        impl SubsonicOperation for Probe {
            type Request = ProbeRequest;
            type Response = ();
            const ENDPOINT: Endpoint = Endpoint::Starred;
            fn build_parameters(_: &ProbeRequest) -> Result<Option<Parameters>, ValidationError> {
                Ok(None)
            }
            fn extract(_: Response) -> Self::Response {}
        }

        assert_eq!(Probe::metadata().endpoint, "getStarred");
        assert!(ProbeRequest.validate().is_ok());
    }
}
