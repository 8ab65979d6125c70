//! Recipe models.
//!
//! A recipe is a unit of provisioning work. Recipes can spawn child recipes,
//! which the API embeds under `_embedded.recipes`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A provisioning recipe and its embedded children.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub template: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub status_detail: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub account_id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub deployment_id: String,
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::serde_helpers::lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: RecipesEmbedded,
}

impl Recipe {
    /// Child recipes spawned by this recipe.
    pub fn children(&self) -> &[Recipe] {
        &self.embedded.recipes
    }
}

/// Recipes envelope contents, shared by the list response and by child recipes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipesEmbedded {
    #[serde(deserialize_with = "crate::serde_helpers::null_as_default")]
    pub recipes: Vec<Recipe>,
}

/// Response of `deployments/{id}/recipes`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RecipesResponse {
    #[serde(
        rename = "_embedded",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub embedded: RecipesEmbedded,
}

impl RecipesResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.embedded.recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_recipe_with_children() {
        let json = r#"{
            "id": "5854017e89d50f424e000201",
            "template": "Recipes::Deployment::Run",
            "status": "complete",
            "status_detail": "Completed",
            "account_id": "5854017e89d50f424e000192",
            "deployment_id": "5854017e89d50f424e000300",
            "name": "Provision",
            "created_at": "2016-12-16T15:12:30.000Z",
            "_embedded": {
                "recipes": [
                    {"id": "child-1", "status": "complete"},
                    {"id": "child-2", "status": "running"}
                ]
            }
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.template, "Recipes::Deployment::Run");
        assert_eq!(recipe.children().len(), 2);
        assert_eq!(recipe.children()[1].status, "running");
        assert!(recipe.created_at.is_some());
    }

    #[test]
    fn test_deserialize_recipe_null_children() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": "r1", "_embedded": {"recipes": null}}"#).unwrap();
        assert!(recipe.children().is_empty());
    }

    #[test]
    fn test_recipes_response_missing_envelope_is_empty() {
        let resp: RecipesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_recipes().is_empty());
    }
}
