//! # API crate: typed client for the signup board REST API
//!
//! The board server is an external collaborator; this crate is the only place
//! that knows its wire contract. Everything above it (the session store, the
//! action gateway) talks to the [`BoardApi`] trait, so tests can substitute a
//! scripted implementation for the real HTTP client.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`ApiError`]: rejected (non-2xx), network, decode and URL failures |
//! | [`models`] | Request/response bodies (`LoginResponse`, `AuthCheck`, `MessageResponse`, `ErrorBody`) |
//! | [`http`] | [`HttpBoardApi`], the `reqwest` implementation |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Success body |
//! |--------|------|------|--------------|
//! | `GET` | `/activities` | | name → activity map ([`Roster`]) |
//! | `POST` | `/login?username=&password=` | | [`LoginResponse`] |
//! | `POST` | `/logout` | bearer | ignored |
//! | `GET` | `/auth/check` | bearer | [`AuthCheck`] |
//! | `POST` | `/activities/{name}/signup?email=` | bearer | [`MessageResponse`] |
//! | `DELETE` | `/activities/{name}/unregister?email=` | bearer | [`MessageResponse`] |
//!
//! Failures carry `{"detail": "..."}` which surfaces as [`ApiError::Rejected`].

pub mod error;
pub mod http;
pub mod models;

pub use error::ApiError;
pub use http::HttpBoardApi;
pub use models::{AuthCheck, ErrorBody, LoginResponse, MessageResponse};
pub use store::{Activity, Roster};

/// Async interface over the board server.
///
/// Protected calls take the bearer token explicitly; the client itself holds no
/// session state.
pub trait BoardApi {
    /// `GET /activities`
    fn activities(&self) -> impl std::future::Future<Output = Result<Roster, ApiError>>;

    /// `POST /login` with credentials as query parameters.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>>;

    /// `POST /logout`
    fn logout(&self, token: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `GET /auth/check`
    fn check_auth(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<AuthCheck, ApiError>>;

    /// `POST /activities/{activity}/signup?email=`
    fn signup(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<MessageResponse, ApiError>>;

    /// `DELETE /activities/{activity}/unregister?email=`
    fn unregister(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<MessageResponse, ApiError>>;
}
