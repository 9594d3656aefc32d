//! The `subsonic-response` envelope and the entities it carries
//!
//! Every Subsonic endpoint answers with the same JSON envelope; only the
//! populated sub-section differs. Sections that an endpoint does not return
//! deserialize to their empty default, so callers can project any section
//! without unwrapping.

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Outer JSON object: `{"subsonic-response": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "subsonic-response")]
    pub response: Response,
}

/// Status value of a successful response
pub const STATUS_OK: &str = "ok";

/// Generic response body shared by all endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Response {
    /// "ok" or "failed"
    pub status: String,
    pub version: String,
    #[serde(rename = "type")]
    pub server_type: Option<String>,
    pub server_version: Option<String>,
    pub open_subsonic: Option<bool>,
    pub error: Option<Fault>,

    pub album_list: AlbumList,
    pub album_list2: AlbumList,
    pub random_songs: SongList,
    pub songs_by_genre: SongList,
    pub now_playing: NowPlaying,
    pub starred: Starred,
    pub starred2: Starred,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Error object of a failed response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fault {
    pub code: i32,
    pub message: Option<String>,
}

/// `albumList` / `albumList2`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlbumList {
    #[serde(rename = "album", default, deserialize_with = "one_or_many")]
    pub albums: Vec<Album>,
}

/// `randomSongs` / `songsByGenre`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SongList {
    #[serde(rename = "song", default, deserialize_with = "one_or_many")]
    pub songs: Vec<Song>,
}

/// `nowPlaying`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NowPlaying {
    #[serde(rename = "entry", default, deserialize_with = "one_or_many")]
    pub entries: Vec<NowPlayingEntry>,
}

/// `starred` / `starred2`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Starred {
    #[serde(rename = "artist", default, deserialize_with = "one_or_many")]
    pub artists: Vec<Artist>,
    #[serde(rename = "album", default, deserialize_with = "one_or_many")]
    pub albums: Vec<Album>,
    #[serde(rename = "song", default, deserialize_with = "one_or_many")]
    pub songs: Vec<Song>,
}

/// Album entry.
///
/// Folder-based lists (`getAlbumList`) fill `title`/`parent`/`is_dir`,
/// ID3-based lists (`getAlbumList2`) fill `name`/`song_count`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Album {
    pub id: String,
    pub parent: Option<String>,
    pub is_dir: Option<bool>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub artist_id: Option<String>,
    pub cover_art: Option<String>,
    pub song_count: Option<u32>,
    pub duration: Option<u32>,
    pub play_count: Option<u64>,
    pub created: Option<String>,
    pub starred: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub user_rating: Option<u8>,
}

impl Album {
    /// Display name regardless of which list flavour produced the entry
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .or(self.album.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Song {
    pub id: String,
    pub parent: Option<String>,
    pub is_dir: Option<bool>,
    pub title: Option<String>,
    pub album: Option<String>,
    pub artist: Option<String>,
    pub track: Option<u32>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub cover_art: Option<String>,
    pub size: Option<u64>,
    pub content_type: Option<String>,
    pub suffix: Option<String>,
    pub duration: Option<u32>,
    pub bit_rate: Option<u32>,
    pub path: Option<String>,
    pub play_count: Option<u64>,
    pub disc_number: Option<u32>,
    pub created: Option<String>,
    pub starred: Option<String>,
    pub album_id: Option<String>,
    pub artist_id: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

/// A song currently being played by some user
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingEntry {
    #[serde(flatten)]
    pub song: Song,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub minutes_ago: Option<u32>,
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artist {
    pub id: String,
    pub name: Option<String>,
    pub cover_art: Option<String>,
    pub album_count: Option<u32>,
    pub starred: Option<String>,
}

/// Some servers send a single-element list as a bare object
///
/// Dispatches on the JSON shape so that errors inside an entry keep their
/// field-level message.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OneOrMany<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OneOrMany<T> {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object or a list of objects")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
            Vec::deserialize(SeqAccessDeserializer::new(seq))
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            T::deserialize(MapAccessDeserializer::new(map)).map(|item| vec![item])
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(OneOrMany(PhantomData))
}
