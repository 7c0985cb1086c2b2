//! Authentication service

use crate::client::{api_client, session_store};
use crate::errors::ServiceError;
use crate::session::{Credential, SharedSessionStore};
use budget_http::client::{ApiClient, ClientError};
use budget_http::types::{
    LoginRequest, MessageResponse, RegisterRequest, RegisterResponse, ResetPasswordRequest,
};

/// Login, account creation and password recovery. The only writer of new
/// credentials into the session store.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    store: SharedSessionStore,
}

impl AuthService {
    pub fn new(client: ApiClient, store: SharedSessionStore) -> Self {
        Self { client, store }
    }

    /// Service backed by the page's registered client and store
    pub fn from_session() -> Result<Self, ClientError> {
        Ok(Self::new(api_client()?, session_store()?))
    }

    /// Log in and keep the returned credential
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ServiceError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.client.login(&request).await?;
        self.store.set(Credential::new(response.access_token))?;
        tracing::info!(username, "Logged in");
        Ok(())
    }

    /// Create an account and sign the new user in
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ServiceError> {
        let response = self.client.register(request).await?;
        self.store.set(Credential::new(response.token.clone()))?;
        tracing::info!(username = %request.username, "Account created");
        Ok(response)
    }

    /// Drop the credential. No backend call is involved.
    pub fn logout(&self) {
        self.store.clear();
        tracing::info!("Logged out");
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_present()
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ServiceError> {
        Ok(self.client.forgot_password(email).await?)
    }

    /// Reset the password with the token from the emailed link
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ServiceError> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        request.validate()?;
        Ok(self.client.reset_password(&request).await?)
    }
}
