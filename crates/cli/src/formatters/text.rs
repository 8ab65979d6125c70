//! Labeled-text formatter implementation.
//!
//! Responsibilities:
//! - Print one `label: value` line per field, labels right-aligned to a fixed width.
//! - Follow every record of a list with a blank line.
//!
//! Does NOT handle:
//! - JSON output (see `json`).

use anyhow::Result;
use compose_client::{Account, Cluster, Database, Datacenter, Deployment, Recipe, User, Version};

use crate::formatters::common::{
    DEFAULT_MISSING_VALUE, format_timestamp, or_missing, push_field, truncate_certificate,
};
use crate::formatters::{FormatOptions, Formatter};

/// Text formatter.
pub struct TextFormatter {
    options: FormatOptions,
}

impl TextFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }
}

/// Render each item, following every record with a blank line.
fn format_list<T>(items: &[T], noun: &str, render: impl Fn(&mut String, &T)) -> String {
    let mut output = String::new();

    if items.is_empty() {
        output.push_str(&format!("No {} found.\n", noun));
        return output;
    }

    for item in items {
        render(&mut output, item);
        output.push('\n');
    }
    output
}

fn push_deployment_summary(output: &mut String, deployment: &Deployment) {
    push_field(output, "ID", or_missing(&deployment.id));
    push_field(output, "Name", or_missing(&deployment.name));
    push_field(output, "Type", or_missing(&deployment.deployment_type));
    push_field(
        output,
        "Created At",
        format_timestamp(deployment.created_at.as_ref()),
    );
}

fn push_recipe(output: &mut String, recipe: &Recipe) {
    push_field(output, "ID", or_missing(&recipe.id));
    push_field(output, "Template", or_missing(&recipe.template));
    push_field(output, "Status", or_missing(&recipe.status));
    push_field(output, "Status Detail", or_missing(&recipe.status_detail));
    push_field(output, "Account ID", or_missing(&recipe.account_id));
    push_field(output, "Deployment ID", or_missing(&recipe.deployment_id));
    push_field(output, "Name", or_missing(&recipe.name));
    push_field(output, "Child Recipes", recipe.children().len());
}

fn push_cluster(output: &mut String, cluster: &Cluster) {
    push_field(output, "ID", or_missing(&cluster.id));
    push_field(output, "Account ID", or_missing(&cluster.account_id));
    push_field(output, "Account Slug", or_missing(&cluster.account_slug));
    push_field(output, "Name", or_missing(&cluster.name));
    push_field(output, "Type", or_missing(&cluster.cluster_type));
    push_field(output, "Multitenant", cluster.multitenant);
    push_field(output, "Provider", or_missing(&cluster.provider));
    push_field(output, "Region", or_missing(&cluster.region));
    push_field(
        output,
        "Created At",
        format_timestamp(cluster.created_at.as_ref()),
    );
    push_field(output, "Subdomain", or_missing(&cluster.subdomain));
}

fn push_datacenter(output: &mut String, datacenter: &Datacenter) {
    push_field(output, "Region", or_missing(&datacenter.region));
    push_field(output, "Provider", or_missing(&datacenter.provider));
    push_field(output, "Slug", or_missing(&datacenter.slug));
}

fn describe_version(version: &Version) -> String {
    let mut text = format!("{} ({}", or_missing(&version.version), or_missing(&version.status));
    if version.preferred {
        text.push_str(", preferred");
    }
    text.push(')');
    text
}

fn push_database(output: &mut String, database: &Database) {
    push_field(output, "Type", or_missing(&database.database_type));
    push_field(output, "Status", or_missing(&database.status));
    for version in database.versions() {
        push_field(output, "Version", describe_version(version));
    }
}

fn join_or_missing(items: &[String]) -> String {
    if items.is_empty() {
        return DEFAULT_MISSING_VALUE.to_string();
    }
    items.join(", ")
}

impl Formatter for TextFormatter {
    fn format_account(&self, account: &Account) -> Result<String> {
        let mut output = String::new();
        push_field(&mut output, "ID", or_missing(&account.id));
        push_field(&mut output, "Name", or_missing(&account.name));
        push_field(&mut output, "Slug", or_missing(&account.slug));
        Ok(output)
    }

    fn format_deployments(&self, deployments: &[Deployment]) -> Result<String> {
        Ok(format_list(deployments, "deployments", |output, deployment| {
            push_deployment_summary(output, deployment);
            push_field(output, "Web UI Link", or_missing(&deployment.web_ui_link()));
        }))
    }

    fn format_deployment(&self, deployment: &Deployment) -> Result<String> {
        let mut output = String::new();
        push_deployment_summary(&mut output, deployment);
        if !deployment.provision_recipe_id.is_empty() {
            push_field(&mut output, "Prov Recipe ID", &deployment.provision_recipe_id);
        }
        if !deployment.ca_certificate_base64.is_empty() {
            push_field(
                &mut output,
                "CA Certificate",
                truncate_certificate(&deployment.ca_certificate_base64, self.options.full_ca),
            );
        }
        push_field(&mut output, "Web UI Link", or_missing(&deployment.web_ui_link()));

        let conn = &deployment.connection_strings;
        push_field(&mut output, "Health", or_missing(&conn.health));
        push_field(&mut output, "SSH", or_missing(&conn.ssh));
        push_field(&mut output, "Admin", or_missing(&conn.admin));
        push_field(&mut output, "SSHAdmin", or_missing(&conn.ssh_admin));
        push_field(&mut output, "CLI Connect", join_or_missing(&conn.cli));
        push_field(&mut output, "Direct Connect", join_or_missing(&conn.direct));
        Ok(output)
    }

    fn format_recipe(&self, recipe: &Recipe) -> Result<String> {
        let mut output = String::new();
        push_recipe(&mut output, recipe);
        Ok(output)
    }

    fn format_recipes(&self, recipes: &[Recipe]) -> Result<String> {
        Ok(format_list(recipes, "recipes", push_recipe))
    }

    fn format_clusters(&self, clusters: &[Cluster]) -> Result<String> {
        Ok(format_list(clusters, "clusters", push_cluster))
    }

    fn format_datacenters(&self, datacenters: &[Datacenter]) -> Result<String> {
        Ok(format_list(datacenters, "datacenters", push_datacenter))
    }

    fn format_databases(&self, databases: &[Database]) -> Result<String> {
        Ok(format_list(databases, "databases", push_database))
    }

    fn format_user(&self, user: &User) -> Result<String> {
        let mut output = String::new();
        push_field(&mut output, "ID", or_missing(&user.id));
        Ok(output)
    }
}
