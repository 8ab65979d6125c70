//! Recipe endpoints.

use reqwest::Client;

use super::request::{get_json, parse_json};
use super::resource::Resource;
use crate::error::Result;
use crate::models::{Recipe, RecipesResponse};

/// Get a single recipe by id.
pub async fn get_recipe(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    recipe_id: &str,
) -> Result<Recipe> {
    let path = Resource::Recipe(recipe_id.to_string()).path();
    let body = get_json(client, base_url, auth_token, &path).await?;
    parse_json(&body, "recipe")
}

/// List the recipes run against a deployment.
pub async fn list_recipes_for_deployment(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    deployment_id: &str,
) -> Result<Vec<Recipe>> {
    let path = Resource::RecipesForDeployment(deployment_id.to_string()).path();
    let body = get_json(client, base_url, auth_token, &path).await?;
    let resp: RecipesResponse = parse_json(&body, "recipes")?;
    Ok(resp.into_recipes())
}
