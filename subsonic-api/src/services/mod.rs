//! Operations grouped by the part of the Subsonic API they cover
//!
//! # Album lists
//! ```rust,ignore
//! use subsonic_api::services::album_lists;
//!
//! let request = album_lists::get_album_list2("newest", None);
//! let albums = api.execute::<album_lists::GetAlbumList2Operation>(&request)?;
//! ```

pub mod album_lists;
pub mod now_playing;
pub mod songs;
pub mod starred;

pub use album_lists::*;
pub use now_playing::*;
pub use songs::*;
pub use starred::*;
