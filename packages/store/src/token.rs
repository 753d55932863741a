//! # Durable token storage
//!
//! The session token is the only piece of client state that survives a page
//! reload. [`TokenStore`] abstracts where it lives so the session logic runs
//! unchanged against browser `localStorage`, a file on disk, or memory in tests.
//!
//! Implementations never fail outward: a storage backend that cannot be read
//! behaves as if no token was saved, and failed writes are logged and dropped.
//! The server stays the authority on whether a token is valid.

/// Async interface over the single persisted session token.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> impl std::future::Future<Output = Option<String>>;
    /// Persist `token`, replacing any previous one.
    fn save(&self, token: &str) -> impl std::future::Future<Output = ()>;
    /// Remove the persisted token.
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
