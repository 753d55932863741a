use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native fallback.
///
/// Clones share the same slot, so a clone handed to a session store and one kept
/// by a test observe the same token.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as after a previous page load.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }

    /// Synchronous peek, for assertions.
    pub fn current(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

impl TokenStore for MemoryStore {
    async fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    async fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    async fn clear(&self) {
        self.token.lock().unwrap().take();
    }
}
