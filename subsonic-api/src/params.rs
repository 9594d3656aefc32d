//! Parameter sets and the names of the optional parameters each operation understands
//!
//! | operation         | optional keys                                   |
//! |-------------------|-------------------------------------------------|
//! | getAlbumList(2)   | size, offset, fromYear*, toYear*, genre*, musicFolderId |
//! | getRandomSongs    | size, genre, fromYear, toYear, musicFolderId    |
//! | getSongsByGenre   | count, offset, musicFolderId                    |
//! | getStarred(2)     | musicFolderId                                   |
//!
//! `*` required for the `byYear` / `byGenre` list types.

pub use subsonic_client::Parameters;

/// Well-known parameter names
pub mod keys {
    /// Album list ordering, always set by the operation itself
    pub const TYPE: &str = "type";
    pub const SIZE: &str = "size";
    pub const COUNT: &str = "count";
    pub const OFFSET: &str = "offset";
    pub const FROM_YEAR: &str = "fromYear";
    pub const TO_YEAR: &str = "toYear";
    pub const GENRE: &str = "genre";
    pub const MUSIC_FOLDER_ID: &str = "musicFolderId";
}

/// Copy the caller's parameters and write `key = value` over them
///
/// A caller-supplied entry for `key` is silently replaced.
pub fn merge_forced(key: &str, value: &str, caller: Option<&Parameters>) -> Parameters {
    let mut merged = caller.cloned().unwrap_or_default();
    merged.insert(key.to_string(), value.to_string());
    merged
}

/// Build a parameter set from `(key, value)` pairs
pub fn params<K, V, I>(pairs: I) -> Parameters
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
