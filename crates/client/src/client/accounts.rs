//! Account API methods for [`ComposeClient`].

use crate::client::ComposeClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Account;

impl ComposeClient {
    /// Get the first account visible to the token.
    pub async fn get_account(&self) -> Result<Account> {
        endpoints::get_account(&self.http, &self.base_url, self.token()).await
    }
}
