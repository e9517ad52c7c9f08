use axum::{Extension, extract::Query};
use serde::Deserialize;

use crate::{
    error::ProxyError, info, management::SharedState, spotify, success, utils,
};

pub const CALLBACK_SUCCESS: &str = "Top tracks fetched successfully. Check the server console.";

#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Completes the login: checks the state, exchanges the code and caches the
/// access token.
///
/// After a successful exchange the user's top tracks are fetched once and
/// printed to the console; failing to get them does not fail the login.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<SharedState>,
) -> Result<&'static str, ProxyError> {
    let returned_state = params.state.unwrap_or_default();
    if !state.auth_states.consume(&returned_state).await {
        return Err(ProxyError::InvalidState);
    }

    if let Some(reason) = params.error {
        return Err(ProxyError::AuthorizationDenied(reason));
    }

    // A missing code still goes to the token endpoint, which rejects it.
    let code = params.code.unwrap_or_default();
    let token = spotify::auth::exchange_code(&state.client, &state.config, &code)
        .await
        .map_err(ProxyError::TokenExchange)?;

    let access_token = token.access_token.clone();
    state.tokens.store(token).await;
    success!("Access token obtained");

    let tracks = spotify::tracks::get_top_tracks(&state.client, &state.config, &access_token).await;
    if !tracks.is_empty() {
        info!("Top tracks:");
        for line in tracks.iter().map(utils::format_track) {
            info!("{}", line);
        }
        println!("{}", utils::render_track_table(&tracks));
    }

    Ok(CALLBACK_SUCCESS)
}
