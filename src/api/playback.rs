use axum::Extension;

use crate::{
    error::ProxyError,
    management::{AppState, SharedState},
    spotify, success,
    types::PlaybackCommand,
};

pub async fn pause(Extension(state): Extension<SharedState>) -> Result<&'static str, ProxyError> {
    relay(&state, PlaybackCommand::Pause).await
}

pub async fn play(Extension(state): Extension<SharedState>) -> Result<&'static str, ProxyError> {
    relay(&state, PlaybackCommand::Play).await
}

pub async fn next(Extension(state): Extension<SharedState>) -> Result<&'static str, ProxyError> {
    relay(&state, PlaybackCommand::Next).await
}

pub async fn previous(
    Extension(state): Extension<SharedState>,
) -> Result<&'static str, ProxyError> {
    relay(&state, PlaybackCommand::Previous).await
}

/// Forwards `command` with the cached token.
///
/// Without a token nothing is sent. Any failure of the outbound call, be it
/// the network or Spotify refusing the command, ends up as the command's
/// generic error text.
async fn relay(state: &AppState, command: PlaybackCommand) -> Result<&'static str, ProxyError> {
    let token = state
        .tokens
        .access_token()
        .await
        .ok_or(ProxyError::MissingToken)?;

    spotify::player::send(&state.client, &state.config, &token, command)
        .await
        .map_err(|e| ProxyError::Playback(command, e))?;

    success!("Relayed {}", command);
    Ok(command.success_message())
}
