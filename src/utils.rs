use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};
use serde_json::Value;
use tabled::Table;

use crate::{
    types::{TopTracksResponse, Track, TrackTableRow},
    warning,
};

/// Length of the anti-CSRF state sent with each authorization request.
pub const STATE_LENGTH: usize = 16;

pub fn generate_state() -> String {
    generate_random_string(STATE_LENGTH)
}

pub fn generate_random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// `Authorization` header value for the client credentials.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Formats a track as `"<name> by <artist>, <artist>"`.
pub fn format_track(track: &Track) -> String {
    let artists = join_artists(track);
    format!("{} by {}", track.name, artists)
}

fn join_artists(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extracts the tracks from a top-tracks response, keeping Spotify's order.
///
/// Anything without a usable `items` array degrades to an empty list and a
/// warning on the console.
pub fn parse_top_tracks(data: &Value) -> Vec<Track> {
    let response: TopTracksResponse = match serde_json::from_value(data.clone()) {
        Ok(r) => r,
        Err(e) => {
            warning!("No data found or no items available: {}", e);
            return Vec::new();
        }
    };

    if response.items.is_empty() {
        warning!("No data found or no items available");
    }

    response.items
}

/// Turns a top-tracks response into `"<name> by <artists>"` lines.
pub fn format_top_tracks(data: &Value) -> Vec<String> {
    parse_top_tracks(data).iter().map(format_track).collect()
}

/// Renders tracks as a console table with their rank.
pub fn render_track_table(tracks: &[Track]) -> String {
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            rank: i + 1,
            track: t.name.clone(),
            artists: join_artists(t),
        })
        .collect();

    Table::new(rows).to_string()
}
