/// REST endpoints covered by this crate
///
/// Each operation targets exactly one endpoint; the wire name is what goes
/// into `/rest/<name>.view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// getAlbumList - albums organized by folder structure
    AlbumList,

    /// getAlbumList2 - albums organized by ID3 tags
    AlbumList2,

    /// getRandomSongs - random selection of songs
    RandomSongs,

    /// getSongsByGenre - songs of one genre
    SongsByGenre,

    /// getNowPlaying - what every user is currently playing
    NowPlaying,

    /// getStarred - starred artists, albums and songs (folder based)
    Starred,

    /// getStarred2 - starred artists, albums and songs (ID3 based)
    Starred2,
}

impl Endpoint {
    /// All endpoints, in documentation order
    pub const ALL: [Endpoint; 7] = [
        Endpoint::AlbumList,
        Endpoint::AlbumList2,
        Endpoint::RandomSongs,
        Endpoint::SongsByGenre,
        Endpoint::NowPlaying,
        Endpoint::Starred,
        Endpoint::Starred2,
    ];

    /// Get the wire name of this endpoint
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::AlbumList => "getAlbumList",
            Endpoint::AlbumList2 => "getAlbumList2",
            Endpoint::RandomSongs => "getRandomSongs",
            Endpoint::SongsByGenre => "getSongsByGenre",
            Endpoint::NowPlaying => "getNowPlaying",
            Endpoint::Starred => "getStarred",
            Endpoint::Starred2 => "getStarred2",
        }
    }

    /// Link to the endpoint's section of the Subsonic API documentation
    pub fn docs_url(&self) -> String {
        format!("http://www.subsonic.org/pages/api.jsp#{}", self.name())
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
