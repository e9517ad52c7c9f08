use tokio::sync::RwLock;

use crate::{types::Token, warning};

/// Single-slot holder for the one access token the proxy serves.
///
/// Starts empty, is filled by the callback handler, and stays filled until
/// the process exits. Two callbacks completing at the same time race: the
/// last write wins and the replaced token is simply dropped.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: RwLock<Option<Token>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `token`, replacing whatever was there.
    pub async fn store(&self, token: Token) {
        let mut slot = self.slot.write().await;
        if slot.is_some() {
            warning!("Replacing the cached access token");
        }
        *slot = Some(token);
    }

    /// The bearer credential for outbound calls, if a login has completed.
    pub async fn access_token(&self) -> Option<String> {
        self.slot
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    pub async fn current_token(&self) -> Option<Token> {
        self.slot.read().await.clone()
    }

    pub async fn is_authorized(&self) -> bool {
        self.slot.read().await.is_some()
    }
}
