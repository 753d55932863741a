//! Bodies of the login and session-check endpoints.

use serde::{Deserialize, Serialize};

/// Successful `POST /login` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// `GET /auth/check` body. `username` is only sent for valid tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthCheck {
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}
