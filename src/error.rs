//! Error types for PetFriends API operations.
//!
//! The main error type is [`PetFriendsError`]. Note the split the client
//! maintains between errors and statuses: an HTTP response with a non-2xx
//! status is *not* an error — tests assert on those statuses directly. Errors
//! are reserved for failures that prevent a `(status, body)` pair from being
//! produced at all (bad configuration, transport failure, unreadable body or
//! photo file) and for the suite's empty-pet-list precondition.
//!
//! # Result Type
//!
//! Use [`PfResult<T>`] as a convenient alias for `Result<T, PetFriendsError>`:
//!
//! ```rust
//! use pet_friends::PfResult;
//!
//! fn my_function() -> PfResult<String> {
//!     Ok("Success".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use std::path::PathBuf;
use thiserror::Error;

/// High-level categorization of errors for handling decisions.
///
/// Use [`PetFriendsError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller made a mistake they can fix (bad base URL, header value
    /// that is not valid HTTP, missing photo file).
    Client,

    /// The remote service or network had an issue. The request never
    /// produced a usable response.
    External,

    /// An environmental precondition the suite relies on does not hold
    /// (e.g. the account owns no pets). Fatal for the affected test.
    Precondition,
}

/// Convenient result type for PetFriends operations.
pub type PfResult<T> = std::result::Result<T, PetFriendsError>;

/// Errors that can occur during PetFriends API operations.
///
/// Each variant can be categorized via [`category()`](Self::category).
/// Use the constructor methods, which log the error on creation.
#[derive(Error, Debug)]
pub enum PetFriendsError {
    /// Client configuration is invalid (empty or malformed base URL,
    /// credentials that cannot be encoded as header values).
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request could not be executed or completed.
    ///
    /// Covers connection failures, DNS errors and the like. A response with
    /// an error status (403, 500, ...) is NOT a `RequestFailed` — it is
    /// returned as a normal [`ApiResponse`](crate::ApiResponse).
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body could not be read off the wire.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the read failure.
        message: String,
    },

    /// A local photo file could not be read for upload.
    #[error("Failed to read photo file {path}: {source}")]
    PhotoRead {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The authenticated account owns no pets.
    ///
    /// Scenarios that mutate an existing pet require at least one pet in the
    /// "my pets" listing; this error is their fatal precondition failure.
    #[error("There are no pets in the account's list")]
    EmptyPetList,
}

impl PetFriendsError {
    /// Get the error category for handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::PhotoRead { .. } => ErrorCategory::Client,
            Self::EmptyPetList => ErrorCategory::Precondition,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "PetFriends client configuration invalid"
        );
        Self::ConfigurationError { message }
    }

    /// Create a request failure (logs at ERROR level).
    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "PetFriends request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    /// Create a response parsing error (logs at WARN level).
    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "PetFriends response body unreadable"
        );
        Self::ResponseParsingError { message }
    }

    /// Create a photo read error (logs at ERROR level).
    pub fn photo_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        log_error!(
            error_type = "photo_read",
            path = %path.display(),
            error = %source,
            "Photo file could not be read"
        );
        Self::PhotoRead { path, source }
    }

    /// Create an empty-pet-list precondition error (logs at WARN level).
    pub fn empty_pet_list() -> Self {
        log_warn!(
            error_type = "empty_pet_list",
            "Account owns no pets; scenario precondition not met"
        );
        Self::EmptyPetList
    }
}
