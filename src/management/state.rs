use std::collections::VecDeque;

use tokio::sync::Mutex;

use crate::utils;

/// How many unanswered `/login` requests are remembered.
pub const MAX_PENDING_STATES: usize = 16;

/// Anti-CSRF state values handed out by `/login` and not yet seen on
/// `/callback`.
///
/// Bounded: once full, issuing a new state forgets the oldest one, so an
/// abandoned login cannot grow the store.
#[derive(Debug, Default)]
pub struct AuthStateStore {
    pending: Mutex<VecDeque<String>>,
}

impl AuthStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh state value and remembers it.
    pub async fn issue(&self) -> String {
        let state = utils::generate_state();
        let mut pending = self.pending.lock().await;
        if pending.len() >= MAX_PENDING_STATES {
            pending.pop_front();
        }
        pending.push_back(state.clone());
        state
    }

    /// Checks `state` against the pending values and forgets it.
    ///
    /// Returns `false` for unknown, already used or empty values.
    pub async fn consume(&self, state: &str) -> bool {
        if state.is_empty() {
            return false;
        }

        let mut pending = self.pending.lock().await;
        match pending.iter().position(|s| s == state) {
            Some(index) => {
                pending.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }
}
