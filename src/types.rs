//! Wire-format types for the PetFriends API.
//!
//! The service talks JSON on success and plain text on some failures, so the
//! core result type [`ApiResponse`] keeps the status and a tolerant
//! [`ResponseBody`] instead of forcing a typed decode. Typed models
//! ([`ApiKey`], [`Pet`], [`PetList`]) are available for callers that want
//! structure; [`ApiResponse::decode`] converts on demand.

use crate::error::{PetFriendsError, PfResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Authentication response body: `{"key": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

/// A pet record as returned by the service.
///
/// `age` travels as a string on the wire but some callers send integers on
/// updates; the deserializer accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(default)]
    pub pet_photo: String,
}

/// Listing response body: `{"pets": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

/// Selector for `get_list_of_pets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetFilter {
    /// Only pets owned by the authenticated account (`filter=my_pets`).
    MyPets,
    /// Every pet on the service (empty filter value).
    All,
}

impl PetFilter {
    /// The query-parameter value the service expects.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::MyPets => "my_pets",
            Self::All => "",
        }
    }
}

/// Body of an API response, decoded as far as the payload allows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The body was not valid JSON; kept verbatim.
    Text(String),
}

impl ResponseBody {
    /// Parse raw body text, falling back to `Text` when it is not JSON.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }
}

/// The `(status, body)` pair every client operation resolves to.
///
/// Error statuses are data here, not `Err` values: the suite asserts on
/// 403s and 500s as documented behavior.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Decoded body.
    pub body: ResponseBody,
}

impl ApiResponse {
    /// The JSON body, if the response carried one.
    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// String value of a top-level JSON field, if present.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.json()?.get(name)?.as_str()
    }

    /// Whether the JSON body has the given top-level field.
    pub fn has_field(&self, name: &str) -> bool {
        self.json().is_some_and(|v| v.get(name).is_some())
    }

    /// Decode the JSON body into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ResponseParsingError`] when the body is not
    /// JSON or does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> PfResult<T> {
        let value = self.json().ok_or_else(|| {
            PetFriendsError::response_parsing_error("Response body is not JSON")
        })?;
        serde_json::from_value(value.clone()).map_err(|e| {
            PetFriendsError::response_parsing_error(format!("Body does not match model: {e}"))
        })
    }
}

/// Accept a JSON string or number and normalize it to a `String`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for age, got {other}"
        ))),
    }
}
