//! Recipe API methods for [`ComposeClient`].

use crate::client::ComposeClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Recipe;

impl ComposeClient {
    /// Get a recipe by id.
    pub async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe> {
        endpoints::get_recipe(&self.http, &self.base_url, self.token(), recipe_id).await
    }

    /// List the recipes of a deployment.
    pub async fn list_recipes_for_deployment(&self, deployment_id: &str) -> Result<Vec<Recipe>> {
        endpoints::list_recipes_for_deployment(
            &self.http,
            &self.base_url,
            self.token(),
            deployment_id,
        )
        .await
    }
}
