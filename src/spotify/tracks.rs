use reqwest::{Client, Method};

use crate::{config::Config, spotify::fetch_web_api, types::Track, utils, warning};

pub const TOP_TRACKS_LIMIT: u32 = 5;
pub const TOP_TRACKS_TIME_RANGE: &str = "long_term";

/// Fetches the user's most listened tracks over the long-term range.
///
/// Never fails: a request error, an unparsable body or a response without
/// `items` is logged and yields an empty list.
pub async fn get_top_tracks(client: &Client, config: &Config, token: &str) -> Vec<Track> {
    let endpoint = format!(
        "v1/me/top/tracks?time_range={range}&limit={limit}",
        range = TOP_TRACKS_TIME_RANGE,
        limit = TOP_TRACKS_LIMIT
    );

    match fetch_web_api(client, config, &endpoint, Method::GET, token).await {
        Ok(data) => utils::parse_top_tracks(&data),
        Err(e) => {
            warning!("Cannot fetch top tracks: {}", e);
            Vec::new()
        }
    }
}

/// Same as [`get_top_tracks`], formatted as `"<name> by <artists>"`.
pub async fn get_top_track_lines(client: &Client, config: &Config, token: &str) -> Vec<String> {
    get_top_tracks(client, config, token)
        .await
        .iter()
        .map(utils::format_track)
        .collect()
}
