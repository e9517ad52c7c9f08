use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::management::SharedState;

pub async fn health(Extension(state): Extension<SharedState>) -> Json<Value> {
    let obtained_at = state.tokens.current_token().await.map(|t| t.obtained_at);
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "authorized": state.tokens.is_authorized().await,
        "obtained_at": obtained_at,
        "pending_logins": state.auth_states.len().await,
    }))
}
