//! Starred items: getStarred (folder based) and getStarred2 (ID3 based)
//!
//! The only optional parameter is `musicFolderId`.

use crate::endpoint::Endpoint;
use crate::operation::{SubsonicOperation, Validate, ValidationError};
use crate::params::Parameters;
use subsonic_client::{Response, Starred};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetStarredRequest {
    pub parameters: Option<Parameters>,
}

impl Validate for GetStarredRequest {}

pub struct GetStarredOperation;

impl SubsonicOperation for GetStarredOperation {
    type Request = GetStarredRequest;
    type Response = Starred;

    const ENDPOINT: Endpoint = Endpoint::Starred;

    fn build_parameters(request: &Self::Request) -> Result<Option<Parameters>, ValidationError> {
        request.validate()?;
        Ok(request.parameters.clone())
    }

    fn extract(response: Response) -> Self::Response {
        response.starred
    }
}

pub struct GetStarred2Operation;

impl SubsonicOperation for GetStarred2Operation {
    type Request = GetStarredRequest;
    type Response = Starred;

    const ENDPOINT: Endpoint = Endpoint::Starred2;

    fn build_parameters(request: &Self::Request) -> Result<Option<Parameters>, ValidationError> {
        request.validate()?;
        Ok(request.parameters.clone())
    }

    fn extract(response: Response) -> Self::Response {
        response.starred2
    }
}

pub fn get_starred(parameters: Option<&Parameters>) -> GetStarredRequest {
    GetStarredRequest {
        parameters: parameters.cloned(),
    }
}
