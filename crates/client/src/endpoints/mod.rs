//! REST API endpoint implementations.
//!
//! Each endpoint is a free function taking the HTTP client, the normalized
//! base URL and the bearer token, so that several clients can share the same
//! code without global state.

mod accounts;
mod clusters;
mod databases;
mod datacenters;
mod deployments;
mod recipes;
mod request;
mod resource;
pub mod url_encoding;
mod users;

pub use accounts::get_account;
pub use clusters::list_clusters;
pub use databases::list_databases;
pub use datacenters::list_datacenters;
pub use deployments::{create_deployment, list_deployments};
pub use recipes::{get_recipe, list_recipes_for_deployment};
pub use request::{endpoint_url, get_json, parse_json};
pub use resource::Resource;
pub use url_encoding::encode_path_segment;
pub use users::get_user;
