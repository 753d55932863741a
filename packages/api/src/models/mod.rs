mod auth;
mod message;

pub use auth::{AuthCheck, LoginResponse};
pub use message::{ErrorBody, MessageResponse};
