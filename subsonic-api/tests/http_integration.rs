//! End-to-end tests against a local mock Subsonic server
//!
//! Responses come from recorded JSON bodies in `tests/fixtures`.

mod helpers;

use helpers::load_fixture;
use mockito::{Matcher, Mock, Server, ServerGuard};
use subsonic_api::{params, ApiError, AuthMode, ClientConfig, SubsonicApi, TransportError};

fn connect(server: &ServerGuard) -> SubsonicApi {
    SubsonicApi::connect(ClientConfig::new(server.url(), "alice", "sesame")).unwrap()
}

fn mock_fixture(server: &mut ServerGuard, endpoint: &str, query: Matcher, fixture: &str) -> Mock {
    server
        .mock("GET", format!("/rest/{}.view", endpoint).as_str())
        .match_query(query)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(load_fixture(fixture))
        .create()
}

#[test]
fn test_album_list2_newest() {
    let mut server = Server::new();
    let mock = mock_fixture(
        &mut server,
        "getAlbumList2",
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "newest".into()),
            Matcher::UrlEncoded("size".into(), "2".into()),
            Matcher::UrlEncoded("u".into(), "alice".into()),
        ]),
        "album_list2_newest.json",
    );

    let albums = connect(&server)
        .get_album_list2("newest", Some(&params([("size", "2")])))
        .unwrap();

    mock.assert();
    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0].display_name(), Some("In Rainbows"));
    assert_eq!(albums[0].song_count, Some(10));
    assert_eq!(albums[1].artist.as_deref(), Some("John Coltrane"));
    assert_eq!(albums[1].year, Some(1957));
}

#[test]
fn test_album_list_by_genre_single_entry() {
    let mut server = Server::new();
    let mock = mock_fixture(
        &mut server,
        "getAlbumList",
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "byGenre".into()),
            Matcher::UrlEncoded("genre".into(), "Rock".into()),
        ]),
        "album_list_by_genre.json",
    );

    let albums = connect(&server)
        .get_album_list("byGenre", Some(&params([("genre", "Rock")])))
        .unwrap();

    mock.assert();
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].id, "11");
    assert_eq!(albums[0].display_name(), Some("Nevermind"));
    assert_eq!(albums[0].is_dir, Some(true));
}

#[test]
fn test_songs_by_genre() {
    let mut server = Server::new();
    let mock = mock_fixture(
        &mut server,
        "getSongsByGenre",
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("genre".into(), "Rock".into()),
            Matcher::UrlEncoded("count".into(), "5".into()),
        ]),
        "songs_by_genre_rock.json",
    );

    let songs = connect(&server)
        .get_songs_by_genre("Rock", Some(&params([("count", "5"), ("genre", "Jazz")])))
        .unwrap();

    mock.assert();
    let ids: Vec<_> = songs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s-101", "s-102"]);
    assert_eq!(songs[0].bit_rate, Some(192));
    assert_eq!(songs[0].media_type.as_deref(), Some("music"));
}

#[test]
fn test_now_playing() {
    let mut server = Server::new();
    let mock = mock_fixture(
        &mut server,
        "getNowPlaying",
        Matcher::UrlEncoded("f".into(), "json".into()),
        "now_playing.json",
    );

    let entries = connect(&server).get_now_playing().unwrap();

    mock.assert();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].song.id, "s-7");
    assert_eq!(entries[0].song.title.as_deref(), Some("So What"));
    assert_eq!(entries[0].username.as_deref(), Some("bob"));
    assert_eq!(entries[0].minutes_ago, Some(1));
    assert_eq!(entries[0].player_name.as_deref(), Some("DSub"));
}

#[test]
fn test_missing_section_is_empty() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/rest/getRandomSongs.view")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"subsonic-response": {"status": "ok", "version": "1.16.1"}}"#)
        .create();

    let songs = connect(&server).get_random_songs(None).unwrap();

    mock.assert();
    assert!(songs.is_empty());
}

#[test]
fn test_server_fault_is_passed_through() {
    let mut server = Server::new();
    let mock = mock_fixture(&mut server, "getAlbumList2", Matcher::Any, "auth_failed.json");

    let err = connect(&server)
        .get_album_list2("random", None)
        .unwrap_err();

    mock.assert();
    match err {
        ApiError::Transport(TransportError::Fault { code, ref message }) => {
            assert_eq!(code, 40);
            assert_eq!(message, "Wrong username or password");
        }
        other => panic!("Expected transport fault, got {:?}", other),
    }
    assert_eq!(err.to_string(), "Subsonic error 40: Wrong username or password");
}

#[test]
fn test_invalid_arguments_send_nothing() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let api = connect(&server);
    assert!(matches!(
        api.get_album_list("loudest", None),
        Err(ApiError::InvalidArgument(_))
    ));
    assert!(matches!(
        api.get_album_list2("byYear", Some(&params([("fromYear", "1990")]))),
        Err(ApiError::MissingRequiredParameter { .. })
    ));

    mock.assert();
}

#[test]
fn test_plain_auth_mode() {
    let mut server = Server::new();
    let mock = mock_fixture(
        &mut server,
        "getNowPlaying",
        Matcher::UrlEncoded("p".into(), "enc:736573616d65".into()),
        "now_playing.json",
    );

    let config =
        ClientConfig::new(server.url(), "alice", "sesame").with_auth_mode(AuthMode::Plain);
    let entries = SubsonicApi::connect(config)
        .unwrap()
        .get_now_playing()
        .unwrap();

    mock.assert();
    assert_eq!(entries.len(), 1);
}
