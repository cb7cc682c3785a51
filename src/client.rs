//! PetFriends API client.

use crate::config::PetFriendsConfig;
use crate::error::{PetFriendsError, PfResult};
use crate::logging::{log_debug, log_error};
use crate::types::{ApiResponse, PetFilter, PetList, ResponseBody};

use reqwest::header::HeaderValue;
use reqwest::multipart;
use std::path::Path;

/// Thin facade over the PetFriends REST API.
///
/// Every operation performs exactly one HTTP request and resolves to an
/// [`ApiResponse`] — non-2xx statuses included. Crate errors are reserved
/// for transport failures and local problems (see [`PetFriendsError`]).
#[derive(Debug)]
pub struct PetFriendsClient {
    client: reqwest::Client,
    config: PetFriendsConfig,
}

impl PetFriendsClient {
    /// Create a new client instance.
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if the configuration
    /// fails validation.
    pub fn new(config: PetFriendsConfig) -> PfResult<Self> {
        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            "PetFriends client initialized"
        );

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Request an API key for the given credentials.
    ///
    /// `GET /api/key` with `email` and `password` headers. The service
    /// answers 200 with `{"key": ...}` on valid credentials and 403
    /// otherwise.
    pub async fn get_api_key(&self, email: &str, password: &str) -> PfResult<ApiResponse> {
        let request = self
            .client
            .get(self.url("/api/key"))
            .header("email", Self::header_value("email", email)?)
            .header("password", Self::header_value("password", password)?);
        self.send("get_api_key", request).await
    }

    /// List pets visible to the key, narrowed by `filter`.
    ///
    /// `GET /api/pets?filter=...`; [`PetFilter::MyPets`] selects only the
    /// account's own pets, [`PetFilter::All`] the whole registry.
    pub async fn get_list_of_pets(
        &self,
        auth_key: &str,
        filter: PetFilter,
    ) -> PfResult<ApiResponse> {
        let request = self
            .client
            .get(self.url("/api/pets"))
            .header("auth_key", Self::header_value("auth_key", auth_key)?)
            .query(&[("filter", filter.as_query_value())]);
        self.send("get_list_of_pets", request).await
    }

    /// Create a pet with a photo attachment.
    ///
    /// `POST /api/pets` as multipart form data: `name`, `animal_type` and
    /// `age` text fields plus a `pet_photo` file part streamed from
    /// `photo_path`.
    pub async fn add_new_pet(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: &Path,
    ) -> PfResult<ApiResponse> {
        let form = multipart::Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", Self::photo_part(photo_path).await?);

        let request = self
            .client
            .post(self.url("/api/pets"))
            .header("auth_key", Self::header_value("auth_key", auth_key)?)
            .multipart(form);
        self.send("add_new_pet", request).await
    }

    /// Create a pet without a photo.
    ///
    /// `POST /api/create_pet_simple`, form-encoded.
    pub async fn add_new_pet_without_photo(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> PfResult<ApiResponse> {
        let request = self
            .client
            .post(self.url("/api/create_pet_simple"))
            .header("auth_key", Self::header_value("auth_key", auth_key)?)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);
        self.send("add_new_pet_without_photo", request).await
    }

    /// Attach or replace the photo of an existing pet.
    ///
    /// `POST /api/pets/set_photo/{pet_id}` with a multipart `pet_photo`
    /// part. The service answers 500 when the file is not a supported image
    /// format; the client sends whatever it is given.
    pub async fn add_photo_of_pet(
        &self,
        auth_key: &str,
        pet_id: &str,
        photo_path: &Path,
    ) -> PfResult<ApiResponse> {
        let form =
            multipart::Form::new().part("pet_photo", Self::photo_part(photo_path).await?);

        let request = self
            .client
            .post(self.url(&format!("/api/pets/set_photo/{pet_id}")))
            .header("auth_key", Self::header_value("auth_key", auth_key)?)
            .multipart(form);
        self.send("add_photo_of_pet", request).await
    }

    /// Update an existing pet's fields.
    ///
    /// `PUT /api/pets/{pet_id}`, form-encoded. The service ignores attempts
    /// to blank `name` or `animal_type` and keeps the prior value.
    pub async fn update_pet_info(
        &self,
        auth_key: &str,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> PfResult<ApiResponse> {
        let request = self
            .client
            .put(self.url(&format!("/api/pets/{pet_id}")))
            .header("auth_key", Self::header_value("auth_key", auth_key)?)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);
        self.send("update_pet_info", request).await
    }

    /// Delete a pet owned by the key.
    ///
    /// `DELETE /api/pets/{pet_id}`.
    pub async fn delete_pet(&self, auth_key: &str, pet_id: &str) -> PfResult<ApiResponse> {
        let request = self
            .client
            .delete(self.url(&format!("/api/pets/{pet_id}")))
            .header("auth_key", Self::header_value("auth_key", auth_key)?);
        self.send("delete_pet", request).await
    }

    /// Id of the first pet in the account's "my pets" listing.
    ///
    /// Scenarios that mutate an existing pet start here. The listing being
    /// non-empty is an environmental precondition, not something this crate
    /// establishes.
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::EmptyPetList`] when the account owns no
    /// pets, or [`PetFriendsError::ResponseParsingError`] when the listing
    /// body does not match the documented shape.
    pub async fn first_my_pet_id(&self, auth_key: &str) -> PfResult<String> {
        let response = self.get_list_of_pets(auth_key, PetFilter::MyPets).await?;
        let listing: PetList = response.decode()?;
        listing
            .pets
            .into_iter()
            .next()
            .map(|pet| pet.id)
            .ok_or_else(PetFriendsError::empty_pet_list)
    }

    // =========================================================================
    // Request plumbing
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Build a header value, rejecting strings that are not legal in HTTP.
    fn header_value(name: &str, value: &str) -> PfResult<HeaderValue> {
        HeaderValue::from_str(value).map_err(|e| {
            PetFriendsError::configuration_error(format!("Invalid {name} header value: {e}"))
        })
    }

    /// Read a photo from disk into a multipart file part.
    ///
    /// The MIME type is inferred from the extension only; an unsupported
    /// format is the server's to reject, not the client's.
    async fn photo_part(path: &Path) -> PfResult<multipart::Part> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PetFriendsError::photo_read(path, e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "pet_photo".to_string());

        multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for_photo(path))
            .map_err(|e| {
                PetFriendsError::configuration_error(format!("Invalid photo MIME type: {e}"))
            })
    }

    /// Execute one request and resolve it to a `(status, body)` pair.
    async fn send(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> PfResult<ApiResponse> {
        let response = request.send().await.map_err(|e| {
            log_error!(
                operation = operation,
                error = %e,
                "HTTP request failed"
            );
            PetFriendsError::request_failed(
                format!("PetFriends {operation} request failed: {e}"),
                Some(Box::new(e)),
            )
        })?;

        let status = response.status().as_u16();
        let raw_body = response.text().await.map_err(|e| {
            log_error!(
                operation = operation,
                error = %e,
                "Failed to read PetFriends response body"
            );
            PetFriendsError::response_parsing_error(format!("Failed to read response: {e}"))
        })?;

        log_debug!(
            operation = operation,
            status = status,
            body = %raw_body,
            "PetFriends response"
        );

        Ok(ApiResponse {
            status,
            body: ResponseBody::parse(&raw_body),
        })
    }
}

/// MIME type for a photo path, by extension.
pub(crate) fn mime_for_photo(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
