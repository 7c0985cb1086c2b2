//! Profile and account service

use crate::client::{api_client, session_store};
use crate::errors::ServiceError;
use crate::session::SharedSessionStore;
use budget_http::client::{ApiClient, ClientError};
use budget_http::types::{
    DeleteAccountRequest, MIN_PASSWORD_LEN, MessageResponse, PasswordChange, UserProfile,
    ValidationError,
};

#[derive(Clone)]
pub struct ProfileService {
    client: ApiClient,
    store: SharedSessionStore,
}

impl ProfileService {
    pub fn new(client: ApiClient, store: SharedSessionStore) -> Self {
        Self { client, store }
    }

    pub fn from_session() -> Result<Self, ClientError> {
        Ok(Self::new(api_client()?, session_store()?))
    }

    pub async fn info(&self) -> Result<UserProfile, ServiceError> {
        Ok(self.client.profile_info().await?)
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ServiceError> {
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort.into());
        }
        let change = PasswordChange {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        Ok(self.client.change_password(&change).await?)
    }

    /// Delete the account and end the session
    pub async fn delete_account(
        &self,
        username: &str,
        password: &str,
    ) -> Result<MessageResponse, ServiceError> {
        let request = DeleteAccountRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.client.delete_account(&request).await?;
        self.store.clear();
        tracing::info!(username, "Account deleted");
        Ok(response)
    }
}
