use subsonic_client::{
    Album, ClientConfig, NowPlayingEntry, Song, Starred, SubsonicClient,
};
use tracing::debug;

use crate::error::Result;
use crate::operation::{SubsonicOperation, Validate};
use crate::params::Parameters;
use crate::services::{
    album_lists, now_playing, songs, starred, GetAlbumList2Operation, GetAlbumListOperation,
    GetNowPlayingOperation, GetRandomSongsOperation, GetSongsByGenreOperation,
    GetStarred2Operation, GetStarredOperation,
};
use crate::transport::Transport;

/// Typed entry point to the Subsonic album and song list endpoints
///
/// The API bridges the stateless operation definitions and a [`Transport`]
/// that performs the actual request. It holds no state of its own, so
/// repeated calls with the same arguments are independent of each other.
///
/// ```rust,ignore
/// use subsonic_api::{ClientConfig, SubsonicApi};
///
/// let api = SubsonicApi::connect(ClientConfig::new("https://music.example.com", "alice", "secret"))?;
/// for album in api.get_album_list2("newest", None)? {
///     println!("{}", album.display_name().unwrap_or("?"));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SubsonicApi<T = SubsonicClient> {
    transport: T,
}

impl SubsonicApi<SubsonicClient> {
    /// Create an API backed by the HTTP client for the given server
    pub fn connect(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(SubsonicClient::new(config)?))
    }
}

impl<T: Transport> SubsonicApi<T> {
    /// Create an API over any transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute an operation
    ///
    /// Validates the request, assembles the parameter set, calls the
    /// operation's endpoint and projects the response. Validation failures
    /// return before the transport is touched.
    ///
    /// # Example
    /// ```rust,ignore
    /// use subsonic_api::services::songs::{get_songs_by_genre, GetSongsByGenreOperation};
    ///
    /// let request = get_songs_by_genre("Rock", None);
    /// let songs = api.execute::<GetSongsByGenreOperation>(&request)?;
    /// ```
    pub fn execute<Op: SubsonicOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let metadata = Op::metadata();

        let parameters = request
            .validate()
            .and_then(|()| Op::build_parameters(request))
            .map_err(|e| {
                debug!(endpoint = metadata.endpoint, error = %e, "Rejected invalid request");
                e
            })?;

        debug!(
            endpoint = metadata.endpoint,
            parameters = ?parameters,
            "Dispatching Subsonic operation"
        );
        let response = self.transport.get(metadata.endpoint, parameters.as_ref())?;

        Ok(Op::extract(response))
    }

    /// Albums ordered by `list_type`, organized by folder
    ///
    /// `list_type` must be one of the ten [`ListType`](crate::ListType) tags;
    /// `byYear` needs `fromYear` and `toYear`, `byGenre` needs `genre`.
    pub fn get_album_list(
        &self,
        list_type: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Vec<Album>> {
        self.execute::<GetAlbumListOperation>(&album_lists::get_album_list(list_type, parameters))
    }

    /// Albums ordered by `list_type`, organized by ID3 tags
    ///
    /// Same rules as [`get_album_list`](Self::get_album_list).
    pub fn get_album_list2(
        &self,
        list_type: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Vec<Album>> {
        self.execute::<GetAlbumList2Operation>(&album_lists::get_album_list2(list_type, parameters))
    }

    /// Random songs, optionally limited by size, genre, year range or music folder
    pub fn get_random_songs(&self, parameters: Option<&Parameters>) -> Result<Vec<Song>> {
        self.execute::<GetRandomSongsOperation>(&songs::get_random_songs(parameters))
    }

    /// Songs in the genre `name`
    pub fn get_songs_by_genre(
        &self,
        name: &str,
        parameters: Option<&Parameters>,
    ) -> Result<Vec<Song>> {
        self.execute::<GetSongsByGenreOperation>(&songs::get_songs_by_genre(name, parameters))
    }

    /// What all users are playing right now
    pub fn get_now_playing(&self) -> Result<Vec<NowPlayingEntry>> {
        self.execute::<GetNowPlayingOperation>(&now_playing::get_now_playing())
    }

    pub fn get_starred(&self, parameters: Option<&Parameters>) -> Result<Starred> {
        self.execute::<GetStarredOperation>(&starred::get_starred(parameters))
    }

    pub fn get_starred2(&self, parameters: Option<&Parameters>) -> Result<Starred> {
        self.execute::<GetStarred2Operation>(&starred::get_starred(parameters))
    }
}
