//! # Spotify Integration Module
//!
//! Thin client for the two Spotify services the proxy talks to:
//!
//! ```text
//! api handlers
//!      ↓
//! spotify::{auth, player, tracks}
//!      ↓
//! fetch_web_api (bearer token, JSON parsing)
//!      ↓
//! accounts.spotify.com / api.spotify.com
//! ```
//!
//! - [`auth`] builds the authorize URL and exchanges authorization codes.
//! - [`player`] relays pause, play, next and previous.
//! - [`tracks`] fetches the user's long-term top tracks.
//!
//! Every call is made exactly once. There is no retry, backoff, rate-limit
//! handling or token refresh; callers decide what a failure means.

use reqwest::{Client, Method, StatusCode};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{config::Config, types::ApiErrorResponse, warning};

pub mod auth;
pub mod player;
pub mod tracks;

/// Failures talking to Spotify.
#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response is not valid JSON: {source}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Spotify answered {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("no access token in response: {0}")]
    MissingAccessToken(String),
}

/// Sends one authenticated request to the Web API and parses the answer.
///
/// `endpoint` is relative to the configured API base, e.g.
/// `v1/me/player/pause`, and may carry a query string.
///
/// - `204 No Content` yields an empty JSON object without touching the body.
/// - Any other body must be JSON, an empty one included; if it is not, the
///   raw text is logged
///   and returned inside [`SpotifyError::Parse`].
/// - A parsed body on a non-success status becomes [`SpotifyError::Api`].
pub async fn fetch_web_api(
    client: &Client,
    config: &Config,
    endpoint: &str,
    method: Method,
    token: &str,
) -> Result<Value, SpotifyError> {
    let url = format!(
        "{base}/{endpoint}",
        base = config.api_url,
        endpoint = endpoint.trim_start_matches('/')
    );

    let request = client.request(method.clone(), &url).bearer_auth(token);
    // PUT and POST without a body still need a length for Spotify's frontend.
    let request = if method == Method::GET {
        request
    } else {
        request.header(reqwest::header::CONTENT_LENGTH, "0")
    };

    let response = request.send().await?;
    let status = response.status();

    if status == StatusCode::NO_CONTENT {
        return Ok(Value::Object(Map::new()));
    }

    let body = response.text().await?;
    let data = parse_json(&body)?;

    if !status.is_success() {
        return Err(SpotifyError::Api {
            status,
            message: api_error_message(&data),
        });
    }

    Ok(data)
}

/// Parses a response body, keeping the raw text around when it is not JSON.
pub fn parse_json(body: &str) -> Result<Value, SpotifyError> {
    serde_json::from_str(body).map_err(|source| {
        warning!("Failed to parse JSON: {}", body);
        SpotifyError::Parse {
            body: body.to_string(),
            source,
        }
    })
}

fn api_error_message(data: &Value) -> String {
    serde_json::from_value::<ApiErrorResponse>(data.clone())
        .ok()
        .and_then(|e| e.error.message)
        .unwrap_or_else(|| data.to_string())
}
