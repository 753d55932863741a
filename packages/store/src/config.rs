//! # Client configuration: `board.toml`
//!
//! Defines the TOML document that configures the signup board client. The web
//! entry point embeds it at build time; every field has a default so an empty
//! document is equivalent to [`BoardConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""              # empty = same origin as the page
//!
//! [banner]
//! dismiss_after_secs = 5     # status banner lifetime
//!
//! [login]
//! close_delay_ms = 1000      # pause before the login overlay closes on success
//!
//! [storage]
//! token_key = "authToken"    # durable storage key for the session token
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`BoardConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Where the REST API lives. |
//! | [`BannerConfig`] | Auto-dismiss interval for the transient status banner. |
//! | [`LoginConfig`] | Login overlay timing. |
//! | [`StorageConfig`] | Name of the persisted token entry. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `board.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// REST API location.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute base URL of the board server. Empty means "same origin".
    #[serde(default)]
    pub base_url: String,
}

/// Status banner configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    #[serde(default = "default_dismiss_after_secs")]
    pub dismiss_after_secs: u32,
}

fn default_dismiss_after_secs() -> u32 {
    5
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            dismiss_after_secs: default_dismiss_after_secs(),
        }
    }
}

/// Login overlay configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u32,
}

fn default_close_delay_ms() -> u32 {
    1000
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

/// Durable storage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    "authToken".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl BoardConfig {
    /// Builder method to point the client at a specific server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the banner lifetime.
    pub fn with_banner_secs(mut self, secs: u32) -> Self {
        self.banner.dismiss_after_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "board.toml"
    }

    pub fn banner_lifetime(&self) -> Duration {
        Duration::from_secs(u64::from(self.banner.dismiss_after_secs))
    }

    pub fn login_close_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.login.close_delay_ms))
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = BoardConfig::from_toml("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.banner_lifetime(), Duration::from_secs(5));
        assert_eq!(config.login_close_delay(), Duration::from_millis(1000));
        assert_eq!(config.storage.token_key, "authToken");
        assert!(config.api.base_url.is_empty());
    }

    #[test]
    fn test_partial_document() {
        let config = BoardConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8000"

            [banner]
            dismiss_after_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.banner.dismiss_after_secs, 2);
        assert_eq!(config.login, LoginConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BoardConfig::default()
            .with_base_url("https://board.example.edu")
            .with_banner_secs(10);
        let text = config.to_toml().unwrap();
        assert_eq!(BoardConfig::from_toml(&text).unwrap(), config);
    }
}
