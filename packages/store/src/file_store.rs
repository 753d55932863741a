//! # Filesystem-backed token store
//!
//! [`FileStore`] persists the session token as a single file so native builds
//! keep the teacher logged in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <token_key>          # the raw token string
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base (for example
//! `~/.local/share/signup-board/` on Linux).

use std::path::PathBuf;

use crate::token::TokenStore;

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(base: PathBuf, key: impl Into<String>) -> Self {
        Self {
            base,
            key: key.into(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStore for FileStore {
    async fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    async fn save(&self, token: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create token directory {:?}: {}", self.base, e);
            return;
        }
        if let Err(e) = std::fs::write(self.token_path(), token) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
    }

    async fn clear(&self) {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session token: {}", e),
        }
    }
}
