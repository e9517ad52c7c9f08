use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{spotify::SpotifyError, types::PlaybackCommand, warning};

/// Everything a route handler can fail with.
///
/// Rendered as a short plain-text body. The detail goes to the console, the
/// browser only gets the generic message.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Access token is required")]
    MissingToken,

    #[error("State mismatch")]
    InvalidState,

    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    #[error("Token exchange failed: {0}")]
    TokenExchange(#[source] SpotifyError),

    #[error("Relaying {0} failed: {1}")]
    Playback(PlaybackCommand, #[source] SpotifyError),

    #[error("Cannot build the authorize URL: {0}")]
    AuthorizeUrl(#[from] url::ParseError),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingToken
            | ProxyError::InvalidState
            | ProxyError::AuthorizationDenied(_) => StatusCode::BAD_REQUEST,
            ProxyError::TokenExchange(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Playback(_, _) | ProxyError::AuthorizeUrl(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The text shown in the browser.
    pub fn public_message(&self) -> String {
        match self {
            ProxyError::TokenExchange(SpotifyError::MissingAccessToken(_)) => {
                "Error obtaining access token".to_string()
            }
            ProxyError::TokenExchange(_) => "Error during the request".to_string(),
            ProxyError::Playback(command, _) => command.failure_message().to_string(),
            ProxyError::AuthorizeUrl(_) => "Error starting the login".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        warning!("{}", self);
        (self.status(), self.public_message()).into_response()
    }
}
