//! getNowPlaying

use crate::endpoint::Endpoint;
use crate::operation::{SubsonicOperation, Validate, ValidationError};
use crate::params::Parameters;
use subsonic_client::{NowPlayingEntry, Response};

/// getNowPlaying takes no parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetNowPlayingRequest;

impl Validate for GetNowPlayingRequest {}

pub struct GetNowPlayingOperation;

impl SubsonicOperation for GetNowPlayingOperation {
    type Request = GetNowPlayingRequest;
    type Response = Vec<NowPlayingEntry>;

    const ENDPOINT: Endpoint = Endpoint::NowPlaying;

    fn build_parameters(request: &Self::Request) -> Result<Option<Parameters>, ValidationError> {
        request.validate()?;
        Ok(None)
    }

    fn extract(response: Response) -> Self::Response {
        response.now_playing.entries
    }
}

pub fn get_now_playing() -> GetNowPlayingRequest {
    GetNowPlayingRequest
}
