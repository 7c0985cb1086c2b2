//! Profile API client methods

use super::{ApiClient, ClientError};
use crate::types::{MessageResponse, PasswordChange, UserProfile};
use reqwest::Method;

impl ApiClient {
    pub async fn profile_info(&self) -> Result<UserProfile, ClientError> {
        let req = self.request(Method::GET, "/api/profile/info");
        self.execute(req).await
    }

    /// Change the password; the current one must be supplied
    pub async fn change_password(
        &self,
        change: &PasswordChange,
    ) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/profile/change-password")
            .json(change);
        self.execute(req).await
    }
}
