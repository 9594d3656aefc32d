//! # Subsonic Album Lists Example
//!
//! Connects to a Subsonic-compatible server and prints a few of the list
//! endpoints: the newest albums, albums from a decade, some random songs and
//! what everyone is listening to right now.
//!
//! ## Usage
//!
//! ```bash
//! SUBSONIC_URL=https://music.example.com \
//! SUBSONIC_USERNAME=alice \
//! SUBSONIC_PASSWORD=secret \
//! cargo run --example album_lists
//! ```
//!
//! Set `SUBSONIC_AUTH=plain` for servers that do not support token
//! authentication, and `SUBSONIC_LOG_LEVEL=subsonic_api=debug` to see the
//! requests being dispatched.

use std::process::ExitCode;

use subsonic_api::logging::{init_logging, LoggingMode};
use subsonic_api::{params, ApiError, ClientConfig, SubsonicApi};

fn main() -> ExitCode {
    if let Err(e) = init_logging(LoggingMode::Development) {
        eprintln!("Logging disabled: {}", e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ApiError> {
    let config = ClientConfig::from_env()?;
    println!("🎵 Connecting to {} as {}", config.base_url, config.username);
    let api = SubsonicApi::connect(config)?;

    println!("\n📀 Newest albums");
    for album in api.get_album_list2("newest", Some(&params([("size", "10")])))? {
        println!(
            "  {} - {}",
            album.artist.as_deref().unwrap_or("Unknown artist"),
            album.display_name().unwrap_or("Untitled")
        );
    }

    println!("\n📅 Albums from the nineties");
    let nineties = params([("fromYear", "1990"), ("toYear", "1999"), ("size", "10")]);
    for album in api.get_album_list2("byYear", Some(&nineties))? {
        println!(
            "  {} ({})",
            album.display_name().unwrap_or("Untitled"),
            album.year.map(|y| y.to_string()).unwrap_or_default()
        );
    }

    println!("\n🎲 Random songs");
    for song in api.get_random_songs(Some(&params([("size", "5")])))? {
        println!(
            "  {} - {}",
            song.artist.as_deref().unwrap_or("Unknown artist"),
            song.title.as_deref().unwrap_or("Untitled")
        );
    }

    println!("\n▶️  Now playing");
    let entries = api.get_now_playing()?;
    if entries.is_empty() {
        println!("  Nobody is listening right now");
    }
    for entry in entries {
        println!(
            "  {}: {} ({} min ago)",
            entry.username.as_deref().unwrap_or("someone"),
            entry.song.title.as_deref().unwrap_or("Untitled"),
            entry.minutes_ago.unwrap_or(0)
        );
    }

    // Argument errors are reported without contacting the server
    if let Err(e) = api.get_album_list("loudest", None) {
        println!("\n⚠️  {}", e);
    }

    Ok(())
}
