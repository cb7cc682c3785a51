//! # pet-friends
//!
//! Client for the PetFriends pet-management REST API, plus the conformance
//! test suite that validates the API's documented behaviors.
//!
//! ## Key Features
//!
//! - **Thin facade**: every operation is one HTTP request returning a
//!   `(status, body)` pair — no retries, no pagination
//! - **Tolerant bodies**: responses are decoded as JSON when possible and
//!   kept as raw text otherwise, so tests can assert on either
//! - **Photo upload**: multipart attachment of local image files
//!
//! ## Example
//!
//! ```rust,no_run
//! use pet_friends::{PetFriendsClient, PetFriendsConfig, PetFilter};
//!
//! # async fn example() -> pet_friends::PfResult<()> {
//! let client = PetFriendsClient::new(PetFriendsConfig::default())?;
//!
//! let auth = client.get_api_key("user@example.com", "secret").await?;
//! assert_eq!(auth.status, 200);
//! let key = auth.field_str("key").unwrap().to_string();
//!
//! let pets = client.get_list_of_pets(&key, PetFilter::MyPets).await?;
//! // Assert on pets.status / pets.json() ...
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::PetFriendsClient;
pub use config::PetFriendsConfig;
pub use error::{PetFriendsError, PfResult};
pub use types::{ApiKey, ApiResponse, Pet, PetFilter, PetList, ResponseBody};
