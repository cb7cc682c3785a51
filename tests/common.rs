//! Test helper utilities for pet-friends tests
//!
//! This module provides reusable fixtures and mock-service builders shared
//! across the scenario test files. Each mock models a documented behavior of
//! the PetFriends service; the tests assert the client surfaces exactly that
//! behavior as a `(status, body)` pair.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use pet_friends::{PetFriendsClient, PetFriendsConfig};
use std::path::PathBuf;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Fixture data (the settings collaborator of the original suite)
// ============================================================================

/// Credentials the mock service accepts.
pub const VALID_EMAIL: &str = "qa.user@example.com";
pub const VALID_PASSWORD: &str = "correct-horse-battery";

/// Credentials no account has.
pub const INVALID_EMAIL: &str = "nobody@example.com";
pub const INVALID_PASSWORD: &str = "wrong-password";

/// The key the mock service issues for valid credentials.
pub const TEST_AUTH_KEY: &str = "ea738148a1f19838e1c5d1413877f369";

/// A pet id used by listing fixtures.
pub const TEST_PET_ID: &str = "f3a1c2d4-0001-4b2b-9a77-petfixture";

/// Path to a bundled fixture file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// The valid JPEG photo fixture.
pub fn jpeg_fixture() -> PathBuf {
    fixture_path("cat1.jpg")
}

/// The deliberately invalid (non-image) photo fixture.
pub fn txt_fixture() -> PathBuf {
    fixture_path("cat0.txt")
}

// ============================================================================
// Client / server setup
// ============================================================================

/// Create a client pointed at the given mock server.
pub fn client_for(server: &MockServer) -> PetFriendsClient {
    PetFriendsClient::new(PetFriendsConfig::new(server.uri()))
        .expect("Failed to create test client")
}

/// Log in with the valid fixture credentials and return the issued key.
///
/// Panics on any deviation from the documented happy path; scenarios that
/// exercise authentication failures call `get_api_key` directly.
pub async fn obtain_key(client: &PetFriendsClient) -> String {
    let response = client
        .get_api_key(VALID_EMAIL, VALID_PASSWORD)
        .await
        .expect("Login request should reach the service");
    assert_eq!(response.status, 200, "Valid credentials should authenticate");
    response
        .field_str("key")
        .expect("Successful login body should carry a key")
        .to_string()
}

// ============================================================================
// Response body builders
// ============================================================================

/// Successful authentication body: `{"key": ...}`.
pub fn key_body() -> serde_json::Value {
    serde_json::json!({ "key": TEST_AUTH_KEY })
}

/// A pet record as the service echoes it.
pub fn pet_body(id: &str, name: &str, animal_type: &str, age: &str, photo: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "animal_type": animal_type,
        "age": age,
        "pet_photo": photo,
    })
}

/// A "my pets" listing body wrapping the given pets.
pub fn pets_listing(pets: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({ "pets": pets })
}

/// 403 response the service produces for bad or missing credentials.
///
/// The live service answers with a plain-text page, not JSON, so the body
/// must decode as `ResponseBody::Text` — and in particular carry no `key`.
pub fn forbidden_response() -> ResponseTemplate {
    ResponseTemplate::new(403).set_body_string("Please provide valid email and password")
}

/// 500 response the service produces for a non-image photo upload.
pub fn invalid_photo_response() -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_string("Internal Server Error: unsupported photo format")
}

// ============================================================================
// Mock mounting helpers (documented service behaviors)
// ============================================================================

/// `GET /api/key` with the valid fixture credentials → 200 + key.
pub async fn mount_valid_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .and(header("email", VALID_EMAIL))
        .and(header("password", VALID_PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(key_body()))
        .mount(server)
        .await;
}

/// `GET /api/key` with anything else → 403.
///
/// Mounted as a catch-all; combine with [`mount_valid_login`] when a
/// scenario needs both outcomes (wiremock prefers the more specific mock).
pub async fn mount_login_forbidden(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(forbidden_response())
        .mount(server)
        .await;
}

/// `GET /api/pets?filter=my_pets` with the fixture key → 200 + listing.
pub async fn mount_my_pets(server: &MockServer, listing: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(header("auth_key", TEST_AUTH_KEY))
        .and(query_param("filter", "my_pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(server)
        .await;
}
