//! JSON formatter tests.

use crate::formatters::{Formatter, JsonFormatter};
use compose_client::{Datacenter, Deployment, Link};
use compose_client::models::DeploymentLinks;

#[test]
fn test_json_deployments_empty_is_array() {
    let output = JsonFormatter.format_deployments(&[]).unwrap();
    assert_eq!(output.trim(), "[]");
}

#[test]
fn test_json_deployment_keeps_full_certificate() {
    let cert = "C".repeat(64);
    let deployment = Deployment {
        id: "d1".to_string(),
        ca_certificate_base64: cert.clone(),
        links: DeploymentLinks {
            compose_web_ui: Link {
                href: "https://app.compose.io/acme/deployments/d1{?embed}".to_string(),
                templated: true,
            },
        },
        ..Default::default()
    };
    let output = JsonFormatter.format_deployment(&deployment).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["ca_certificate_base64"], cert.as_str());
    assert_eq!(value["type"], "");
    assert!(value.get("errors").is_none());
    assert_eq!(
        value["_links"]["compose_web_ui"]["href"],
        "https://app.compose.io/acme/deployments/d1{?embed}"
    );
}

#[test]
fn test_json_datacenters() {
    let datacenters = vec![Datacenter {
        region: "us-east-1".to_string(),
        provider: "aws".to_string(),
        slug: "aws:us-east-1".to_string(),
    }];
    let output = JsonFormatter.format_datacenters(&datacenters).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["slug"], "aws:us-east-1");
    assert!(output.ends_with('\n'));
}
