//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. It
//! keeps the session token under one key of `window.localStorage` (by default
//! `"authToken"`), so a reload of the page finds it again.
//!
//! ## Handle
//!
//! The struct only stores the key. The `Storage` object is looked up on every
//! call because `web_sys::Storage` is not `Clone`-friendly across async tasks and
//! the lookup is a cheap property read.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled cookies, quota). Reads
//! then return `None` and writes are logged and skipped, which degrades to an
//! anonymous session rather than an error screen.

use crate::token::TokenStore;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    async fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage.get_item(&self.key).ok().flatten()
    }

    async fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        if storage.set_item(&self.key, token).is_err() {
            tracing::warn!("Failed to write {} to localStorage", self.key);
        }
    }

    async fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.remove_item(&self.key).is_err() {
            tracing::warn!("Failed to remove {} from localStorage", self.key);
        }
    }
}
