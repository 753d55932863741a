//! # Action gateway
//!
//! The single path by which the client changes the roster. Both actions share one
//! shape ([`ActionGateway::dispatch`]):
//!
//! 1. No authenticated session → [`ActionError::AuthRequired`], no request sent.
//! 2. Missing email or activity → [`ActionError::Validation`], no request sent.
//! 3. Send the request with the session's bearer token.
//! 4. 2xx → refresh the roster, return the server's confirmation message.
//! 5. 401 → [`ActionError::SessionInvalid`]; the caller decides how to downgrade.
//! 6. Other non-2xx → [`ActionError::ServerRejected`] with the server detail.
//! 7. No response → [`ActionError::NetworkFailure`].
//!
//! Failed actions leave the roster untouched.

use api::{ApiError, BoardApi};
use store::TokenStore;

use crate::error::{ActionError, GENERIC_FAILURE, SESSION_EXPIRED};
use crate::roster::RosterCache;
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Signup,
    Unregister,
}

impl ActionKind {
    fn auth_required_message(self) -> &'static str {
        match self {
            ActionKind::Signup => "Please login as a teacher to register students",
            ActionKind::Unregister => "Please login as a teacher to unregister students",
        }
    }

    fn network_failure_message(self) -> &'static str {
        match self {
            ActionKind::Signup => "Failed to sign up. Please try again.",
            ActionKind::Unregister => "Failed to unregister. Please try again.",
        }
    }
}

/// One in-flight roster mutation. Lives only for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub kind: ActionKind,
    pub activity: String,
    pub email: String,
}

impl PendingAction {
    pub fn signup(activity: &str, email: &str) -> Self {
        Self {
            kind: ActionKind::Signup,
            activity: activity.to_string(),
            email: email.trim().to_string(),
        }
    }

    pub fn unregister(activity: &str, email: &str) -> Self {
        Self {
            kind: ActionKind::Unregister,
            activity: activity.to_string(),
            email: email.trim().to_string(),
        }
    }
}

pub struct ActionGateway<'a, A, T> {
    api: &'a A,
    session: &'a SessionStore<T>,
    roster: &'a RosterCache,
}

impl<'a, A: BoardApi, T: TokenStore> ActionGateway<'a, A, T> {
    pub fn new(api: &'a A, session: &'a SessionStore<T>, roster: &'a RosterCache) -> Self {
        Self {
            api,
            session,
            roster,
        }
    }

    /// Register `email` for `activity`.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ActionError> {
        self.dispatch(PendingAction::signup(activity, email)).await
    }

    /// Remove `email` from `activity`.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ActionError> {
        self.dispatch(PendingAction::unregister(activity, email)).await
    }

    pub async fn dispatch(&self, action: PendingAction) -> Result<String, ActionError> {
        let Some(token) = self.session.token() else {
            return Err(ActionError::AuthRequired(
                action.kind.auth_required_message().to_string(),
            ));
        };
        if action.email.is_empty() {
            return Err(ActionError::Validation(
                "Please enter a student email".to_string(),
            ));
        }
        if action.activity.is_empty() {
            return Err(ActionError::Validation(
                "Please select an activity".to_string(),
            ));
        }

        tracing::debug!("{:?} {} for {}", action.kind, action.email, action.activity);
        let result = match action.kind {
            ActionKind::Signup => {
                self.api
                    .signup(&token, &action.activity, &action.email)
                    .await
            }
            ActionKind::Unregister => {
                self.api
                    .unregister(&token, &action.activity, &action.email)
                    .await
            }
        };

        match result {
            Ok(response) => {
                self.roster.refresh(self.api).await;
                Ok(response.message)
            }
            Err(e) if e.is_unauthorized() => {
                tracing::warn!("{:?} rejected: session token no longer valid", action.kind);
                Err(ActionError::SessionInvalid(SESSION_EXPIRED.to_string()))
            }
            Err(ApiError::Rejected { status, detail }) => {
                tracing::info!("{:?} rejected with status {}", action.kind, status);
                Err(ActionError::ServerRejected(
                    detail.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                ))
            }
            Err(e) => {
                tracing::error!("Error during {:?}: {}", action.kind, e);
                Err(ActionError::NetworkFailure(
                    action.kind.network_failure_message().to_string(),
                ))
            }
        }
    }
}
