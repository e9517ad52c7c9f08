use reqwest::Client;
use serde_json::Value;

use crate::{
    config::Config,
    spotify::{SpotifyError, fetch_web_api},
    types::PlaybackCommand,
};

/// Relays one player command on the user's active device.
///
/// PUT for pause and play, POST for next and previous, no request body.
/// Spotify normally answers `204 No Content`, which comes back as an empty
/// object.
pub async fn send(
    client: &Client,
    config: &Config,
    token: &str,
    command: PlaybackCommand,
) -> Result<Value, SpotifyError> {
    fetch_web_api(client, config, command.endpoint(), command.method(), token).await
}
