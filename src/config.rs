//! Client configuration.

use crate::error::{PetFriendsError, PfResult};
use serde::{Deserialize, Serialize};

/// Base URL of the live PetFriends service.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Environment variable overriding the base URL (mock servers, staging).
pub const BASE_URL_ENV: &str = "PETFRIENDS_BASE_URL";

/// PetFriends client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetFriendsConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
}

impl Default for PetFriendsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl PetFriendsConfig {
    /// Create a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build configuration from the environment, falling back to the live
    /// service URL when `PETFRIENDS_BASE_URL` is unset.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if the base URL is
    /// empty, not HTTP(S), or carries a trailing slash (endpoint paths are
    /// joined with a leading slash).
    pub fn validate(&self) -> PfResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(PetFriendsError::configuration_error(
                "Base URL is required",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PetFriendsError::configuration_error(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.base_url.ends_with('/') {
            return Err(PetFriendsError::configuration_error(format!(
                "Base URL must not end with a slash: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
