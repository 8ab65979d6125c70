//! Common test utilities for integration tests.
//!
//! Re-exports the types every endpoint test needs and builds API base URLs
//! pointing at a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock servers serve the API under the `/2016-07` prefix, like the real API

// Re-export test utilities from compose-client
#[allow(unused_imports)]
pub use compose_client::testing::{load_fixture, load_fixture_str};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use compose_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token every test client sends.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// API base URL (without trailing slash) served by `server`.
#[allow(dead_code)]
pub fn api_base(server: &MockServer) -> String {
    format!("{}/2016-07", server.uri())
}

/// A `ComposeClient` pointed at `server`.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> compose_client::ComposeClient {
    compose_client::ComposeClient::builder()
        .base_url(format!("{}/", api_base(server)))
        .api_token(secrecy::SecretString::new(TEST_TOKEN.to_string().into()))
        .build()
        .expect("client should build")
}
