//! # API Module
//!
//! HTTP handlers for the proxy. All of them read the shared
//! [`AppState`](crate::management::AppState) through an axum `Extension` and
//! answer with plain text, except [`health`] which answers with JSON.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - `GET /login`, redirects to the Spotify consent page with a
//!   fresh anti-CSRF state.
//! - [`callback`] - `GET /callback?code=..&state=..`, exchanges the code and
//!   caches the access token.
//!
//! ### Playback
//!
//! - [`pause`], [`play`], [`next`], [`previous`] - relay one player command
//!   each. All of them need a completed login and answer
//!   `400 Access token is required` otherwise.
//! - [`top_tracks`] - `GET /top-tracks`, the five long-term top tracks, one
//!   per line.
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`, status, version and whether a token is cached.

mod callback;
mod health;
mod login;
mod playback;
mod tracks;

pub use callback::{CALLBACK_SUCCESS, CallbackParams, callback};
pub use health::health;
pub use login::login;
pub use playback::{next, pause, play, previous};
pub use tracks::top_tracks;
