//! # Session store
//!
//! Owns the client's view of "who is logged in". [`Session`] is the value;
//! [`SessionStore`] is the shared container that mutates it and mirrors the
//! token into durable storage through a [`TokenStore`].
//!
//! ## Lifecycle
//!
//! | Operation | Network | Outcome |
//! |-----------|---------|---------|
//! | [`restore`](SessionStore::restore) | `GET /auth/check` when a token was persisted | Authenticated if the server vouches for the token, otherwise anonymous with the persisted token removed. Never fails. |
//! | [`login`](SessionStore::login) | `POST /login` after presence checks | Token saved in memory and storage, or an [`ActionError`] with nothing persisted. |
//! | [`logout`](SessionStore::logout) | `POST /logout`, best effort | Always anonymous with no persisted token. |
//! | [`invalidate`](SessionStore::invalidate) | | Downgrade after the server rejected the current token. |
//!
//! ## Superseded completions
//!
//! Operations never hold a borrow of the session across a network call. When a
//! call returns they re-check that the token they acted on is still the current
//! one, so a slow `/auth/check` cannot undo a login that happened meanwhile.

use std::cell::RefCell;
use std::rc::Rc;

use api::{ApiError, BoardApi};
use store::TokenStore;

use crate::error::ActionError;

const MISSING_CREDENTIALS: &str = "Please enter username and password";
const LOGIN_FAILED: &str = "Login failed";
const LOGIN_RETRY: &str = "Login failed. Please try again.";

/// Authentication state. A token is only held once the server has accepted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        username: Option<String>,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username, .. } => username.as_deref(),
            Session::Anonymous => None,
        }
    }
}

/// Shared session container. Clones observe the same session.
#[derive(Clone)]
pub struct SessionStore<T> {
    state: Rc<RefCell<Session>>,
    tokens: T,
}

impl<T: TokenStore> SessionStore<T> {
    pub fn new(tokens: T) -> Self {
        Self {
            state: Rc::new(RefCell::new(Session::Anonymous)),
            tokens,
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token().map(str::to_string)
    }

    fn set(&self, session: Session) {
        *self.state.borrow_mut() = session;
    }

    fn holds_token(&self, token: &str) -> bool {
        self.state.borrow().token() == Some(token)
    }

    /// Remove the persisted token only if it is still `token`.
    async fn forget_persisted(&self, token: &str) {
        if self.tokens.load().await.as_deref() == Some(token) {
            self.tokens.clear().await;
        }
    }

    /// Validate a token left by a previous page load. Returns whether the
    /// session ended up authenticated.
    pub async fn restore<A: BoardApi>(&self, api: &A) -> bool {
        let Some(token) = self.tokens.load().await else {
            tracing::debug!("No persisted session token");
            return self.is_authenticated();
        };

        match api.check_auth(&token).await {
            Ok(check) if check.authenticated => {
                // A login or logout that completed while we were checking wins.
                let still_persisted =
                    self.tokens.load().await.as_deref() == Some(token.as_str());
                if still_persisted && !self.is_authenticated() {
                    tracing::info!(
                        "Restored session for {}",
                        check.username.as_deref().unwrap_or("<unknown>")
                    );
                    self.set(Session::Authenticated {
                        token,
                        username: check.username,
                    });
                }
            }
            outcome => {
                match outcome {
                    Ok(_) => tracing::info!("Persisted session token is no longer valid"),
                    Err(e) => tracing::warn!("Session check failed: {}", e),
                }
                self.forget_persisted(&token).await;
                if self.holds_token(&token) {
                    self.set(Session::Anonymous);
                }
            }
        }

        self.is_authenticated()
    }

    /// Log in with teacher credentials. On success returns the username the
    /// server reported.
    pub async fn login<A: BoardApi>(
        &self,
        api: &A,
        username: &str,
        password: &str,
    ) -> Result<String, ActionError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ActionError::Validation(MISSING_CREDENTIALS.to_string()));
        }

        match api.login(username, password).await {
            Ok(response) => {
                self.tokens.save(&response.token).await;
                tracing::info!("Logged in as {}", response.username);
                self.set(Session::Authenticated {
                    token: response.token,
                    username: Some(response.username.clone()),
                });
                Ok(response.username)
            }
            Err(ApiError::Rejected { status, detail }) => {
                tracing::info!("Login rejected with status {}", status);
                Err(ActionError::ServerRejected(
                    detail.unwrap_or_else(|| LOGIN_FAILED.to_string()),
                ))
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                Err(ActionError::NetworkFailure(LOGIN_RETRY.to_string()))
            }
        }
    }

    /// End the session. Local state is cleared first; the server is told
    /// afterwards and its answer only logged.
    pub async fn logout<A: BoardApi>(&self, api: &A) {
        let token = self.token();
        self.set(Session::Anonymous);
        self.tokens.clear().await;

        let Some(token) = token else {
            return;
        };
        match api.logout(&token).await {
            Ok(()) => tracing::info!("Logged out"),
            Err(e) => tracing::warn!("Logout notification failed: {}", e),
        }
    }

    /// Downgrade to anonymous because the server rejected `token`. Ignored
    /// if the session has since moved on to another token.
    pub async fn invalidate(&self, token: &str) -> bool {
        if !self.holds_token(token) {
            return false;
        }
        tracing::info!("Server rejected session token; downgrading to anonymous");
        self.set(Session::Anonymous);
        self.forget_persisted(token).await;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeApi, TOKEN};
    use store::MemoryStore;

    #[tokio::test]
    async fn test_restore_without_token_stays_anonymous() {
        let api = FakeApi::board();
        let session = SessionStore::new(MemoryStore::new());

        assert!(!session.restore(&api).await);
        assert_eq!(session.current(), Session::Anonymous);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_then_reload_restores_same_user() {
        let api = FakeApi::board();
        let tokens = MemoryStore::new();

        let session = SessionStore::new(tokens.clone());
        let user = session.login(&api, "ms.smith", "t3ach").await.unwrap();
        assert_eq!(user, "ms.smith");
        assert_eq!(tokens.current().as_deref(), Some(TOKEN));

        // Simulated reload: fresh in-memory state, same durable storage
        let reloaded = SessionStore::new(tokens.clone());
        assert!(reloaded.restore(&api).await);
        assert_eq!(reloaded.current().username(), Some("ms.smith"));
        assert_eq!(reloaded.token().as_deref(), Some(TOKEN));
    }

    #[tokio::test]
    async fn test_restore_with_rejected_token_clears_it() {
        let api = FakeApi::board();
        let tokens = MemoryStore::with_token("stale");
        let session = SessionStore::new(tokens.clone());

        assert!(!session.restore(&api).await);
        assert!(!session.is_authenticated());
        assert!(tokens.current().is_none());
    }

    #[tokio::test]
    async fn test_restore_network_failure_is_anonymous() {
        let api = FakeApi::board();
        api.set_offline(true);
        let tokens = MemoryStore::with_token(TOKEN);
        let session = SessionStore::new(tokens.clone());

        assert!(!session.restore(&api).await);
        assert!(tokens.current().is_none());
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let api = FakeApi::board();
        let session = SessionStore::new(MemoryStore::new());

        for (u, p) in [("", "t3ach"), ("ms.smith", ""), ("   ", "t3ach"), ("", "")] {
            let err = session.login(&api, u, p).await.unwrap_err();
            assert_eq!(
                err,
                ActionError::Validation("Please enter username and password".to_string())
            );
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let api = FakeApi::board();
        let session = SessionStore::new(MemoryStore::new());
        session.login(&api, "ms.smith", "t3ach").await.unwrap();

        assert_eq!(
            api.calls(),
            vec![Call::Login {
                username: "ms.smith".to_string(),
                password: "t3ach".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_login_rejected_uses_server_detail() {
        let api = FakeApi::board();
        let tokens = MemoryStore::new();
        let session = SessionStore::new(tokens.clone());

        let err = session.login(&api, "ms.smith", "wrong").await.unwrap_err();
        assert_eq!(
            err,
            ActionError::ServerRejected("Invalid username or password".to_string())
        );
        assert!(!session.is_authenticated());
        assert!(tokens.current().is_none());
    }

    #[tokio::test]
    async fn test_login_rejected_without_detail() {
        let api = FakeApi::board();
        api.fail_next(ApiError::Rejected {
            status: 500,
            detail: None,
        });
        let session = SessionStore::new(MemoryStore::new());

        let err = session.login(&api, "ms.smith", "t3ach").await.unwrap_err();
        assert_eq!(err.message(), "Login failed");
    }

    #[tokio::test]
    async fn test_login_network_failure() {
        let api = FakeApi::board();
        api.set_offline(true);
        let tokens = MemoryStore::new();
        let session = SessionStore::new(tokens.clone());

        let err = session.login(&api, "ms.smith", "t3ach").await.unwrap_err();
        assert_eq!(
            err,
            ActionError::NetworkFailure("Login failed. Please try again.".to_string())
        );
        assert!(tokens.current().is_none());
    }

    #[tokio::test]
    async fn test_logout_always_clears() {
        let api = FakeApi::board();
        let tokens = MemoryStore::new();
        let session = SessionStore::new(tokens.clone());
        session.login(&api, "ms.smith", "t3ach").await.unwrap();

        api.set_offline(true);
        session.logout(&api).await;

        assert_eq!(session.current(), Session::Anonymous);
        assert!(tokens.current().is_none());
        assert!(api.calls().contains(&Call::Logout {
            token: TOKEN.to_string()
        }));
    }

    #[tokio::test]
    async fn test_logout_when_anonymous_skips_network() {
        let api = FakeApi::board();
        let session = SessionStore::new(MemoryStore::new());
        session.logout(&api).await;
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_restore_does_not_undo_logout_during_check() {
        let api = FakeApi::board();
        // The server still accepts the token persisted by an earlier page load
        SessionStore::new(MemoryStore::new())
            .login(&api, "ms.smith", "t3ach")
            .await
            .unwrap();

        let tokens = MemoryStore::with_token(TOKEN);
        let session = SessionStore::new(tokens.clone());
        let other = session.clone();
        let (_, ()) = tokio::join!(session.restore(&api), async {
            other.login(&api, "ms.smith", "t3ach").await.unwrap();
            other.logout(&api).await;
        });

        assert_eq!(session.current(), Session::Anonymous);
        assert!(tokens.current().is_none());
    }

    #[tokio::test]
    async fn test_invalidate_ignores_superseded_token() {
        let api = FakeApi::board();
        let tokens = MemoryStore::new();
        let session = SessionStore::new(tokens.clone());
        session.login(&api, "ms.smith", "t3ach").await.unwrap();

        assert!(!session.invalidate("older-token").await);
        assert!(session.is_authenticated());
        assert_eq!(tokens.current().as_deref(), Some(TOKEN));

        assert!(session.invalidate(TOKEN).await);
        assert!(!session.is_authenticated());
        assert!(tokens.current().is_none());
    }
}
