use axum::Extension;

use crate::{error::ProxyError, management::SharedState, spotify};

pub async fn top_tracks(Extension(state): Extension<SharedState>) -> Result<String, ProxyError> {
    let token = state
        .tokens
        .access_token()
        .await
        .ok_or(ProxyError::MissingToken)?;

    // one line per track; no tracks is an empty body
    let lines = spotify::tracks::get_top_track_lines(&state.client, &state.config, &token).await;
    Ok(lines.join("\n"))
}
