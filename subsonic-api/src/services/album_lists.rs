//! Album list operations
//!
//! getAlbumList returns albums as folders of the music library;
//! getAlbumList2 returns the same lists organized by ID3 tags. Both accept:
//!
//! | parameter     | required              | default | notes                              |
//! |---------------|-----------------------|---------|------------------------------------|
//! | type          | yes (positional)      |         | one of the ten [`ListType`](crate::ListType) tags |
//! | size          | no                    | 10      | max 500                            |
//! | offset        | no                    | 0       | for paging                         |
//! | fromYear      | if type is `byYear`   |         | fromYear > toYear gives reverse chronological order |
//! | toYear        | if type is `byYear`   |         |                                    |
//! | genre         | if type is `byGenre`  |         | e.g. "Rock"                        |
//! | musicFolderId | no                    |         | since 1.11.0                       |

use crate::define_album_list_operation;
use paste::paste;

define_album_list_operation! {
    operation: GetAlbumList,
    endpoint: AlbumList,
    section: album_list,
}

define_album_list_operation! {
    operation: GetAlbumList2,
    endpoint: AlbumList2,
    section: album_list2,
}
