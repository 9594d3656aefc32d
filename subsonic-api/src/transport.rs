//! The seam between operations and the HTTP client
//!
//! Operations never talk to the network directly; they hand an endpoint name
//! and a parameter set to a [`Transport`]. [`SubsonicClient`] is the real
//! implementation; tests and embedding applications can supply their own.

use std::rc::Rc;
use std::sync::Arc;

use subsonic_client::{Response, SubsonicClient, TransportError};

use crate::params::Parameters;

/// Something that can call a Subsonic endpoint and return its envelope
pub trait Transport {
    /// Call `endpoint` with `parameters` (`None` means no parameters at all)
    fn get(&self, endpoint: &str, parameters: Option<&Parameters>)
        -> Result<Response, TransportError>;
}

impl Transport for SubsonicClient {
    fn get(
        &self,
        endpoint: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Response, TransportError> {
        SubsonicClient::get(self, endpoint, parameters)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(
        &self,
        endpoint: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Response, TransportError> {
        (**self).get(endpoint, parameters)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(
        &self,
        endpoint: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Response, TransportError> {
        (**self).get(endpoint, parameters)
    }
}

impl<T: Transport + ?Sized> Transport for Rc<T> {
    fn get(
        &self,
        endpoint: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Response, TransportError> {
        (**self).get(endpoint, parameters)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(
        &self,
        endpoint: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Response, TransportError> {
        (**self).get(endpoint, parameters)
    }
}
