//! Integration tests for `cocli create deployment`.
//!
//! Tests cover:
//! - Rejection of `--raw` before any request
//! - Rejection of a missing `--cluster`/`--datacenter` before any request
//! - Account lookup followed by the creation request
//! - Server-reported rejections printed as errors

mod common;

use common::cocli_cmd_with_server;
use compose_client::testing::load_fixture;
use predicates::prelude::*;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_accounts(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/2016-07/accounts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("accounts/list_accounts.json")),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_create_deployment_requires_placement() {
    let mock_server = MockServer::start().await;
    mount_accounts(&mock_server, 0).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    cocli_cmd_with_server(&mock_server.uri())
        .args(["create", "deployment", "inventory", "postgresql"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "Must supply either a --cluster id or --datacenter region",
        ));
}

#[tokio::test]
async fn test_create_deployment_rejects_raw() {
    let mock_server = MockServer::start().await;
    mount_accounts(&mock_server, 0).await;

    cocli_cmd_with_server(&mock_server.uri())
        .args([
            "--raw",
            "create",
            "deployment",
            "inventory",
            "postgresql",
            "--datacenter",
            "aws:us-east-1",
        ])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Raw mode not supported"));
}

#[tokio::test]
async fn test_create_deployment_posts_with_account_id() {
    let mock_server = MockServer::start().await;
    mount_accounts(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .and(body_partial_json(serde_json::json!({
            "name": "inventory",
            "type": "postgresql",
            "account_id": "5854017e89d50f424e000192",
            "datacenter": "aws:us-east-1",
            "ssl": true
        })))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(load_fixture("deployments/create_deployment.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    cocli_cmd_with_server(&mock_server.uri())
        .args([
            "create",
            "deployment",
            "inventory",
            "postgresql",
            "--datacenter",
            "aws:us-east-1",
            "--ssl",
            "--fmt",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("           Name: inventory\n")
                .and(predicate::str::contains(" CA Certificate: LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0t...\n"))
                .and(predicate::str::contains(" Prov Recipe ID: 5854017e89d50f424e000299\n")),
        );
}

#[tokio::test]
async fn test_create_deployment_fullca() {
    let mock_server = MockServer::start().await;
    mount_accounts(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(load_fixture("deployments/create_deployment.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    cocli_cmd_with_server(&mock_server.uri())
        .args([
            "create",
            "deployment",
            "inventory",
            "postgresql",
            "--cluster",
            "57a8d3a8b2d1e6004a000012",
            "--fmt",
            "--fullca",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            " CA Certificate: LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0tLS0tCk1JSURkekNDQWwrZ0F3SUJB\n",
        ));
}

#[tokio::test]
async fn test_create_deployment_rejection_is_error() {
    let mock_server = MockServer::start().await;
    mount_accounts(&mock_server, 1).await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(load_fixture("deployments/create_deployment_rejected.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    cocli_cmd_with_server(&mock_server.uri())
        .args([
            "create",
            "deployment",
            "inventory",
            "postgresql",
            "--datacenter",
            "aws:us-east-1",
        ])
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Deployment rejected: Deployment name 'inventory' is already taken",
        ));
}
