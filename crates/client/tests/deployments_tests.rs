//! Deployment endpoint tests.
//!
//! This module tests listing and creating deployments:
//! - Listing returns every embedded deployment with template-stripped links
//! - Creation posts only the parameters that are set
//! - Creation with invalid parameters sends no request
//! - A rejection payload is returned as a deployment carrying an error message

mod common;

use common::*;
use compose_client::{ClientError, CreateDeploymentParams};
use wiremock::matchers::{body_json, header, method, path};

fn params_with_datacenter() -> CreateDeploymentParams {
    let mut params = CreateDeploymentParams::new("inventory", "postgresql");
    params.account_id = "5854017e89d50f424e000192".to_string();
    params.datacenter = Some("aws:us-east-1".to_string());
    params
}

#[tokio::test]
async fn test_list_deployments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2016-07/deployments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("deployments/list_deployments.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let deployments = endpoints::list_deployments(&client, &api_base(&mock_server), TEST_TOKEN)
        .await
        .unwrap();

    assert_eq!(deployments.len(), 2);
    assert_eq!(deployments[0].name, "orders");
    assert_eq!(deployments[0].deployment_type, "mongodb");
    assert_eq!(
        deployments[0].web_ui_link(),
        "https://app.compose.io/acme/deployments/orders"
    );
    assert_eq!(deployments[1].connection_strings.direct.len(), 1);
    assert!(deployments[1].provision_recipe_id.is_empty());
}

#[tokio::test]
async fn test_list_deployments_empty_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2016-07/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let deployments = endpoints::list_deployments(&client, &api_base(&mock_server), TEST_TOKEN)
        .await
        .unwrap();

    assert!(deployments.is_empty());
}

#[tokio::test]
async fn test_list_deployments_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2016-07/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::list_deployments(&client, &api_base(&mock_server), TEST_TOKEN).await;

    assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_create_deployment_posts_set_fields_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(serde_json::json!({
            "name": "inventory",
            "account_id": "5854017e89d50f424e000192",
            "datacenter": "aws:us-east-1",
            "type": "postgresql",
            "units": 2
        })))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(load_fixture("deployments/create_deployment.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut params = params_with_datacenter();
    params.units = Some(2);

    let client = Client::new();
    let deployment =
        endpoints::create_deployment(&client, &api_base(&mock_server), TEST_TOKEN, &params)
            .await
            .unwrap();

    assert_eq!(deployment.id, "5854017e89d50f424e000399");
    assert_eq!(deployment.deployment_type, "postgresql");
    assert_eq!(deployment.error_message(), None);
}

#[tokio::test]
async fn test_create_deployment_without_placement_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut params = CreateDeploymentParams::new("inventory", "postgresql");
    params.account_id = "5854017e89d50f424e000192".to_string();

    let client = Client::new();
    let result =
        endpoints::create_deployment(&client, &api_base(&mock_server), TEST_TOKEN, &params).await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_create_deployment_without_account_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut params = params_with_datacenter();
    params.account_id.clear();

    let client = Client::new();
    let result =
        endpoints::create_deployment(&client, &api_base(&mock_server), TEST_TOKEN, &params).await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_create_deployment_rejection_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(load_fixture("deployments/create_deployment_rejected.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let deployment = endpoints::create_deployment(
        &client,
        &api_base(&mock_server),
        TEST_TOKEN,
        &params_with_datacenter(),
    )
    .await
    .unwrap();

    assert_eq!(
        deployment.error_message(),
        Some("Deployment name 'inventory' is already taken".to_string())
    );
}

#[tokio::test]
async fn test_create_deployment_rejection_with_list_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"errors": {"error": ["quota exceeded"]}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let deployment = endpoints::create_deployment(
        &client,
        &api_base(&mock_server),
        TEST_TOKEN,
        &params_with_datacenter(),
    )
    .await
    .unwrap();

    assert_eq!(deployment.error_message(), Some("quota exceeded".to_string()));
}

#[tokio::test]
async fn test_create_deployment_server_error_without_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2016-07/deployments"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::create_deployment(
        &client,
        &api_base(&mock_server),
        TEST_TOKEN,
        &params_with_datacenter(),
    )
    .await;

    assert!(matches!(
        result,
        Err(ClientError::ApiError { status: 503, ref message, .. }) if message == "Service Unavailable"
    ));
}
