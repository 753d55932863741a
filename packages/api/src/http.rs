//! # `reqwest` implementation of [`BoardApi`]
//!
//! [`HttpBoardApi`] speaks the board server's JSON contract. It compiles for both
//! native targets and `wasm32` (where `reqwest` rides on the browser's `fetch`).
//!
//! ## URL building
//!
//! Endpoints are appended to the configured base URL as path segments, so an
//! activity name such as `"Chess Club"` becomes one percent-encoded segment
//! (`/activities/Chess%20Club/signup`). Query values (`username`, `password`,
//! `email`) are form-encoded by `reqwest`.
//!
//! ## Response handling
//!
//! Every endpoint funnels through [`expect_json`]: a 2xx body is decoded into the
//! endpoint's response type, anything else becomes [`ApiError::Rejected`] carrying
//! the body's `detail` string when one could be parsed.

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use store::Roster;

use crate::error::ApiError;
use crate::models::{AuthCheck, ErrorBody, LoginResponse, MessageResponse};
use crate::BoardApi;

/// HTTP client for the board server.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    client: Client,
    base: Url,
}

impl HttpBoardApi {
    /// Create a client rooted at `base_url` (e.g. `"http://localhost:8000"`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url.path());
        Ok(self.client.request(method, url))
    }
}

/// Decode a 2xx body as `T`, or turn the response into [`ApiError::Rejected`].
async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }
    Err(rejection(response).await)
}

/// Turn a non-2xx response into [`ApiError::Rejected`], keeping the `detail`
/// field when the body carries one.
async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    ApiError::Rejected { status, detail }
}

impl BoardApi for HttpBoardApi {
    async fn activities(&self) -> Result<Roster, ApiError> {
        let response = self.request(Method::GET, &["activities"])?.send().await?;
        expect_json(response).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .request(Method::POST, &["login"])?
            .query(&[("username", username), ("password", password)])
            .send()
            .await?;
        expect_json(response).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, &["logout"])?
            .bearer_auth(token)
            .send()
            .await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(rejection(response).await)
    }

    async fn check_auth(&self, token: &str) -> Result<AuthCheck, ApiError> {
        let response = self
            .request(Method::GET, &["auth", "check"])?
            .bearer_auth(token)
            .send()
            .await?;
        expect_json(response).await
    }

    async fn signup(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .request(Method::POST, &["activities", activity, "signup"])?
            .bearer_auth(token)
            .query(&[("email", email)])
            .send()
            .await?;
        expect_json(response).await
    }

    async fn unregister(
        &self,
        token: &str,
        activity: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        let response = self
            .request(Method::DELETE, &["activities", activity, "unregister"])?
            .bearer_auth(token)
            .query(&[("email", email)])
            .send()
            .await?;
        expect_json(response).await
    }
}
