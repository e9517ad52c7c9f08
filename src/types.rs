use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// The access token held by the proxy.
///
/// Only `access_token` is ever used for requests. The rest is kept for the
/// console and the health endpoint; the proxy never refreshes or expires it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub track: String,
    pub artists: String,
}

/// Body of a Web API error response, e.g. `{"error": {"status": 404, "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub status: Option<u16>,
    pub message: Option<String>,
}

/// The four player commands the proxy relays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Pause,
    Play,
    Next,
    Previous,
}

impl PlaybackCommand {
    pub fn method(self) -> reqwest::Method {
        match self {
            PlaybackCommand::Pause | PlaybackCommand::Play => reqwest::Method::PUT,
            PlaybackCommand::Next | PlaybackCommand::Previous => reqwest::Method::POST,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            PlaybackCommand::Pause => "v1/me/player/pause",
            PlaybackCommand::Play => "v1/me/player/play",
            PlaybackCommand::Next => "v1/me/player/next",
            PlaybackCommand::Previous => "v1/me/player/previous",
        }
    }

    /// Text sent back to the browser after a relayed command.
    pub fn success_message(self) -> &'static str {
        match self {
            PlaybackCommand::Pause => "Playback paused",
            PlaybackCommand::Play => "Playback started",
            PlaybackCommand::Next => "Skipped to next track",
            PlaybackCommand::Previous => "Skipped to previous track",
        }
    }

    /// Text sent back to the browser when the relay fails for any reason.
    pub fn failure_message(self) -> &'static str {
        match self {
            PlaybackCommand::Pause => "Error pausing playback",
            PlaybackCommand::Play => "Error starting playback",
            PlaybackCommand::Next => "Error skipping to next track",
            PlaybackCommand::Previous => "Error skipping to previous track",
        }
    }
}

impl std::fmt::Display for PlaybackCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlaybackCommand::Pause => "pause",
            PlaybackCommand::Play => "play",
            PlaybackCommand::Next => "next",
            PlaybackCommand::Previous => "previous",
        };
        f.write_str(name)
    }
}
