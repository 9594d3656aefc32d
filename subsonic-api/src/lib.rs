//! Typed album and song lists for the Subsonic API
//!
//! This crate validates the arguments of the Subsonic list endpoints, merges
//! them with the parameters each endpoint fixes itself, sends the request
//! through a [`Transport`] and returns the relevant part of the response as
//! typed values. It uses the private `subsonic-client` crate for HTTP.
//!
//! ```rust,ignore
//! use subsonic_api::{params, ClientConfig, SubsonicApi};
//!
//! let api = SubsonicApi::connect(ClientConfig::from_env()?)?;
//!
//! let sixties = params([("fromYear", "1960"), ("toYear", "1969"), ("size", "50")]);
//! let albums = api.get_album_list2("byYear", Some(&sixties))?;
//!
//! let rock = api.get_songs_by_genre("Rock", Some(&params([("count", "20")])))?;
//! let playing = api.get_now_playing()?;
//! ```
//!
//! Argument errors (`InvalidArgument`, `MissingRequiredParameter`) are
//! returned before anything is sent; transport errors are passed through
//! unchanged.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod list_type;
pub mod logging;
pub mod operation;
pub mod params;
pub mod services;
pub mod transport;

pub use client::SubsonicApi;
pub use endpoint::Endpoint;
pub use error::{ApiError, Result};
pub use list_type::{is_valid_list_type, ListType};
pub use operation::{SubsonicOperation, Validate, ValidationError};
pub use params::{params, Parameters};
pub use transport::Transport;

// Re-export the transport types callers need
pub use subsonic_client::{
    Album, AlbumList, Artist, AuthMode, ClientConfig, ConfigError, Fault, NowPlaying,
    NowPlayingEntry, Response, Song, SongList, Starred, SubsonicClient, TransportError,
};
