//! Private HTTP transport for the Subsonic REST API
//!
//! This crate provides a minimal blocking client that authenticates against a
//! Subsonic-compatible server (Subsonic, Airsonic, Navidrome, Gonic, ...),
//! sends `GET /rest/<endpoint>.view` requests and decodes the JSON
//! `subsonic-response` envelope into [`Response`].
//!
//! It performs no validation of endpoint-specific parameters; that is the job
//! of the `subsonic-api` crate layered on top.

mod auth;
mod config;
mod error;
mod response;

pub use auth::token;
pub use config::{AuthMode, ClientConfig, DEFAULT_API_VERSION, DEFAULT_CLIENT_NAME};
pub use error::{ConfigError, TransportError};
pub use response::{
    Album, AlbumList, Artist, Fault, NowPlaying, NowPlayingEntry, Response, Song, SongList,
    Starred, STATUS_OK,
};

use std::collections::BTreeMap;

use response::Envelope;
use tracing::{debug, trace, warn};

/// Caller-supplied query parameters, keyed by Subsonic parameter name
pub type Parameters = BTreeMap<String, String>;

/// A minimal Subsonic client bound to one server and account
#[derive(Debug, Clone)]
pub struct SubsonicClient {
    agent: ureq::Agent,
    config: ClientConfig,
}

impl SubsonicClient {
    /// Create a client for the given server
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.connect_timeout)
            .timeout_read(config.read_timeout)
            .timeout_write(config.read_timeout)
            .build();

        Ok(Self { agent, config })
    }

    /// Create a client from `SUBSONIC_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Call a REST endpoint and return the decoded envelope
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint name without suffix (e.g., "getAlbumList2")
    /// * `parameters` - Extra query parameters, `None` for none
    ///
    /// # Returns
    /// The response body, or `TransportError::Fault` when the server
    /// reports `status: "failed"`
    pub fn get(
        &self,
        endpoint: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Response, TransportError> {
        let url = self.endpoint_url(endpoint);
        debug!(
            endpoint,
            parameter_count = parameters.map_or(0, |p| p.len()),
            "Sending Subsonic request"
        );

        let mut request = self.agent.get(&url);
        for (key, value) in auth::auth_params(&self.config)? {
            request = request.query(key, &value);
        }
        if let Some(parameters) = parameters {
            for (key, value) in parameters {
                request = request.query(key, value);
            }
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                return Err(Self::status_error(endpoint, code, response))
            }
            Err(other) => return Err(TransportError::Network(other.to_string())),
        };
        trace!(endpoint, status = response.status(), "Subsonic response received");

        let body = response
            .into_string()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| TransportError::Parse(e.to_string()))?;

        Self::extract_response(envelope)
    }

    /// Error for a non-2xx answer
    ///
    /// A body carrying a failed `subsonic-response` envelope becomes a
    /// `Fault`; anything else is reported as an HTTP failure.
    fn status_error(endpoint: &str, code: u16, response: ureq::Response) -> TransportError {
        let fault = response
            .into_string()
            .ok()
            .and_then(|body| serde_json::from_str::<Envelope>(&body).ok())
            .and_then(|envelope| Self::extract_response(envelope).err());

        match fault {
            Some(fault @ TransportError::Fault { .. }) => fault,
            _ => TransportError::Network(format!("{} failed: HTTP {}", endpoint, code)),
        }
    }

    /// Check connectivity and credentials
    pub fn ping(&self) -> Result<(), TransportError> {
        self.get("ping", None).map(|_| ())
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/rest/{}.view", self.config.normalized_base_url(), endpoint)
    }

    fn extract_response(envelope: Envelope) -> Result<Response, TransportError> {
        let response = envelope.response;
        if response.is_ok() {
            return Ok(response);
        }

        let fault = response.error.unwrap_or_default();
        let message = fault
            .message
            .unwrap_or_else(|| "Subsonic server returned an error".to_string());
        warn!(code = fault.code, message = %message, "Subsonic request failed");
        Err(TransportError::Fault {
            code: fault.code,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> Envelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        let result = SubsonicClient::new(ClientConfig::new("music.example.com", "a", "b"));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_debug_hides_password() {
        let client =
            SubsonicClient::new(ClientConfig::new("http://localhost", "alice", "hunter2-secret"))
                .unwrap();
        assert!(!format!("{:?}", client).contains("hunter2-secret"));
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client =
            SubsonicClient::new(ClientConfig::new("https://music.example.com/", "a", "b")).unwrap();
        assert_eq!(
            client.endpoint_url("getNowPlaying"),
            "https://music.example.com/rest/getNowPlaying.view"
        );
    }

    #[test]
    fn test_extract_response_ok() {
        let result = SubsonicClient::extract_response(envelope(
            r#"{"subsonic-response": {"status": "ok", "version": "1.16.1"}}"#,
        ));
        assert_eq!(result.unwrap().version, "1.16.1");
    }

    #[test]
    fn test_extract_response_fault() {
        let result = SubsonicClient::extract_response(envelope(
            r#"{"subsonic-response": {"status": "failed", "version": "1.16.1",
                "error": {"code": 70, "message": "Album not found"}}}"#,
        ));

        match result.unwrap_err() {
            TransportError::Fault { code, message } => {
                assert_eq!(code, 70);
                assert_eq!(message, "Album not found");
            }
            other => panic!("Expected TransportError::Fault, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_response_fault_without_error_object() {
        let result = SubsonicClient::extract_response(envelope(
            r#"{"subsonic-response": {"status": "failed", "version": "1.16.1"}}"#,
        ));

        match result.unwrap_err() {
            TransportError::Fault { code, message } => {
                assert_eq!(code, 0);
                assert!(message.contains("returned an error"));
            }
            other => panic!("Expected TransportError::Fault, got {:?}", other),
        }
    }
}
