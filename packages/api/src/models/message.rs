use serde::{Deserialize, Serialize};

/// `{"message": "..."}` confirmation returned by the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"detail": "..."}` failure body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
