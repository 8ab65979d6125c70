//! Configuration and startup tests for cocli.
//!
//! Tests cover:
//! - Missing token fails before any request
//! - Invalid base URL and timeout values
//! - Argument errors exit with the validation code
//! - Help and version output

mod common;

use common::cocli_cmd;
use predicates::prelude::*;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_missing_token_fails_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    cocli_cmd()
        .env_remove("COMPOSEAPITOKEN")
        .env(
            "COMPOSE_API_BASE_URL",
            format!("{}/2016-07/", mock_server.uri()),
        )
        .args(["show", "account"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "COMPOSEAPITOKEN environment variable not set",
        ));
}

#[test]
fn test_whitespace_token_is_missing() {
    cocli_cmd()
        .env("COMPOSEAPITOKEN", "   ")
        .args(["show", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("COMPOSEAPITOKEN"));
}

#[test]
fn test_invalid_base_url_flag() {
    cocli_cmd()
        .args(["--base-url", "not a url", "show", "user"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid base URL"));
}

#[test]
fn test_zero_timeout_rejected() {
    cocli_cmd()
        .args(["--timeout", "0", "show", "user"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_non_numeric_timeout_env_is_validation_error() {
    cocli_cmd()
        .env("COMPOSE_TIMEOUT", "soon")
        .args(["show", "user"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("soon"));
}

#[test]
fn test_unknown_subcommand_is_validation_error() {
    cocli_cmd()
        .args(["show", "everything"])
        .assert()
        .code(5);
}

#[test]
fn test_help_mentions_token_variable() {
    cocli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("COMPOSEAPITOKEN")
                .and(predicate::str::contains("--raw"))
                .and(predicate::str::contains("--fmt"))
                .and(predicate::str::contains("--fullca")),
        );
}

#[test]
fn test_create_deployment_help_lists_flags() {
    cocli_cmd()
        .args(["create", "deployment", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--cluster")
                .and(predicate::str::contains("--datacenter"))
                .and(predicate::str::contains("--version"))
                .and(predicate::str::contains("--units"))
                .and(predicate::str::contains("--wired-tiger")),
        );
}
