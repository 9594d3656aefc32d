//! Test helpers shared by the integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use subsonic_api::{Parameters, Response, Transport, TransportError};

/// Load a JSON response body from `tests/fixtures`
pub fn load_fixture(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(filename);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}

/// One recorded transport invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub parameters: Option<Parameters>,
}

/// Transport stub that records every call and answers with a fixed envelope
pub struct RecordingTransport {
    response: Response,
    failure: Option<fn() -> TransportError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn returning(response: Response) -> Self {
        Self {
            response,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: fn() -> TransportError) -> Self {
        Self {
            response: Response::default(),
            failure: Some(failure),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls()
            .pop()
            .expect("transport was never called")
    }
}

impl Transport for RecordingTransport {
    fn get(
        &self,
        endpoint: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Response, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            parameters: parameters.cloned(),
        });

        match self.failure {
            Some(make_error) => Err(make_error()),
            None => Ok(self.response.clone()),
        }
    }
}
