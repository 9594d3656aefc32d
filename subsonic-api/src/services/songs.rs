//! Song list operations: random songs and songs by genre

use crate::endpoint::Endpoint;
use crate::operation::{SubsonicOperation, Validate, ValidationError};
use crate::params::{keys, merge_forced, Parameters};
use subsonic_client::{Response, Song};

/// Request for getRandomSongs
///
/// Optional parameters, passed through untouched:
/// * `size` - maximum number of songs, max 500, default 10
/// * `genre` - only songs of this genre
/// * `fromYear` - only songs published in or after this year
/// * `toYear` - only songs published in or before this year
/// * `musicFolderId` - only songs in this music folder
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetRandomSongsRequest {
    pub parameters: Option<Parameters>,
}

impl Validate for GetRandomSongsRequest {}

pub struct GetRandomSongsOperation;

impl SubsonicOperation for GetRandomSongsOperation {
    type Request = GetRandomSongsRequest;
    type Response = Vec<Song>;

    const ENDPOINT: Endpoint = Endpoint::RandomSongs;

    fn build_parameters(request: &Self::Request) -> Result<Option<Parameters>, ValidationError> {
        request.validate()?;
        Ok(request.parameters.clone())
    }

    fn extract(response: Response) -> Self::Response {
        response.random_songs.songs
    }
}

pub fn get_random_songs(parameters: Option<&Parameters>) -> GetRandomSongsRequest {
    GetRandomSongsRequest {
        parameters: parameters.cloned(),
    }
}

/// Request for getSongsByGenre
///
/// Optional parameters:
/// * `count` - maximum number of songs, max 500, default 10
/// * `offset` - for paging through the genre
/// * `musicFolderId` - only songs in this music folder
///
/// `genre` always comes from `name`; a `genre` entry in `parameters` is replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GetSongsByGenreRequest {
    pub name: String,
    pub parameters: Option<Parameters>,
}

impl Validate for GetSongsByGenreRequest {}

pub struct GetSongsByGenreOperation;

impl SubsonicOperation for GetSongsByGenreOperation {
    type Request = GetSongsByGenreRequest;
    type Response = Vec<Song>;

    const ENDPOINT: Endpoint = Endpoint::SongsByGenre;

    fn build_parameters(request: &Self::Request) -> Result<Option<Parameters>, ValidationError> {
        request.validate()?;
        Ok(Some(merge_forced(
            keys::GENRE,
            &request.name,
            request.parameters.as_ref(),
        )))
    }

    fn extract(response: Response) -> Self::Response {
        response.songs_by_genre.songs
    }
}

pub fn get_songs_by_genre(
    name: impl Into<String>,
    parameters: Option<&Parameters>,
) -> GetSongsByGenreRequest {
    GetSongsByGenreRequest {
        name: name.into(),
        parameters: parameters.cloned(),
    }
}
