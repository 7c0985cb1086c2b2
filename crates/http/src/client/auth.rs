//! Account and authentication API client methods

use super::{ApiClient, ClientError};
use crate::types::{
    DeleteAccountRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, RegisterResponse, ResetPasswordRequest, UserProfile,
};
use reqwest::Method;

impl ApiClient {
    /// Exchange username (or email) and password for an access token
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, "/api/auth/login").json(request);
        self.execute(req).await
    }

    /// Create an account; the response carries a token for the new user
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, ClientError> {
        let req = self.request(Method::POST, "/api/auth/register").json(request);
        self.execute(req).await
    }

    /// Request a password reset link
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/auth/forgot-password")
            .json(&ForgotPasswordRequest {
                email: email.to_string(),
            });
        self.execute(req).await
    }

    /// Set a new password using a reset token
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::POST, "/api/auth/reset-password")
            .json(request);
        self.execute(req).await
    }

    /// Get the signed-in user
    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        let req = self.request(Method::GET, "/api/auth/me");
        self.execute(req).await
    }

    /// Permanently delete the signed-in account with all its data
    pub async fn delete_account(
        &self,
        request: &DeleteAccountRequest,
    ) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::DELETE, "/api/auth/delete-account")
            .json(request);
        self.execute(req).await
    }
}
