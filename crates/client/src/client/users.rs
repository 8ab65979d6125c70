//! Current-user API method for [`ComposeClient`].

use crate::client::ComposeClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::User;

impl ComposeClient {
    /// Get the user the token belongs to.
    pub async fn get_user(&self) -> Result<User> {
        endpoints::get_user(&self.http, &self.base_url, self.token()).await
    }
}
