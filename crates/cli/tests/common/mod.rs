//! Shared test utilities for cocli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point commands at a wiremock server serving the API under `/2016-07/`.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `COMPOSEAPITOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `cocli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `COMPOSEAPITOKEN` is set to a dummy value to satisfy config validation.
/// - Host overrides of the base URL and timeout are cleared.
pub fn cocli_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cocli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("COMPOSEAPITOKEN", "test-token");

    cmd.env_remove("COMPOSE_API_BASE_URL")
        .env_remove("COMPOSE_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `cocli` command talking to `server_uri`.
#[allow(dead_code)]
pub fn cocli_cmd_with_server(server_uri: &str) -> Command {
    let mut cmd = cocli_cmd();
    cmd.env("COMPOSE_API_BASE_URL", format!("{}/2016-07/", server_uri));
    cmd
}
