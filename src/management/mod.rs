mod auth;
mod state;

use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;

pub use auth::TokenCache;
pub use state::AuthStateStore;
pub use state::MAX_PENDING_STATES;

/// Everything the route handlers share.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub tokens: TokenCache,
    pub auth_states: AuthStateStore,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: Config, client: Client) -> Self {
        AppState {
            config,
            client,
            tokens: TokenCache::new(),
            auth_states: AuthStateStore::new(),
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
