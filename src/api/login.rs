use axum::{Extension, response::Redirect};

use crate::{error::ProxyError, management::SharedState, spotify};

/// Sends the browser to the Spotify consent page.
///
/// Each call issues a new state value; `/callback` only accepts a state that
/// was handed out here and not used yet.
pub async fn login(Extension(state): Extension<SharedState>) -> Result<Redirect, ProxyError> {
    let csrf_state = state.auth_states.issue().await;
    let url = spotify::auth::authorize_url(&state.config, &csrf_state)?;
    Ok(Redirect::to(&url))
}
