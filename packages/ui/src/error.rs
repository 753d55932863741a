//! Failure taxonomy for user-initiated operations.
//!
//! Every variant carries the message shown to the user, so `to_string()` is
//! exactly what ends up in the banner or the login overlay.

use thiserror::Error;

pub(crate) const GENERIC_FAILURE: &str = "An error occurred";
pub(crate) const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Required local input missing; raised before any network call.
    #[error("{0}")]
    Validation(String),

    /// A mutating action was attempted without an authenticated session.
    #[error("{0}")]
    AuthRequired(String),

    /// The server answered with a failure status.
    #[error("{0}")]
    ServerRejected(String),

    /// No usable response was received.
    #[error("{0}")]
    NetworkFailure(String),

    /// The server no longer accepts the session token.
    #[error("{0}")]
    SessionInvalid(String),
}

impl ActionError {
    pub fn message(&self) -> &str {
        match self {
            ActionError::Validation(m)
            | ActionError::AuthRequired(m)
            | ActionError::ServerRejected(m)
            | ActionError::NetworkFailure(m)
            | ActionError::SessionInvalid(m) => m,
        }
    }
}
