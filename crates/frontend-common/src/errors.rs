//! Errors surfaced to views

use crate::session::SessionError;
use budget_http::client::ClientError;
use budget_http::types::ValidationError;
use serde_json::Value;
use thiserror::Error;

/// Failure of a service call
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// Rejected locally before anything was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ServiceError {
    /// Message suitable for inline display
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(error) => user_friendly_error(error),
            Self::Session(error) => error.to_string(),
            Self::Validation(error) => error.to_string(),
        }
    }

    /// Whether the backend rejected the credential
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Client(error) if error.is_auth_expired())
    }
}

/// Convert a client error into something a person can read
///
/// The backend reports failures as `{"detail": "..."}`, or for request
/// validation as `{"detail": [{"msg": "..."}, ...]}`.
pub fn user_friendly_error(error: &ClientError) -> String {
    match error {
        ClientError::NoResponse(_) => {
            "Unable to reach the server. Check your connection and try again.".to_string()
        }
        ClientError::Setup(_) | ClientError::Configuration(_) => {
            "Something went wrong preparing the request.".to_string()
        }
        ClientError::Decode(_) => "The server sent an unexpected response.".to_string(),
        ClientError::AuthenticationFailed(body) => {
            detail(body).unwrap_or_else(|| "Your session has expired. Please log in again.".into())
        }
        other => detail(other.message()).unwrap_or_else(|| other.to_string()),
    }
}

fn detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn string_detail_is_used_verbatim() {
        let error = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Email already registered"}"#.into(),
        );
        assert_eq!(user_friendly_error(&error), "Email already registered");
    }

    #[test]
    fn validation_details_are_joined() {
        let error = ClientError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"value is not a valid email address"}]}"#.into(),
        );
        assert_eq!(
            user_friendly_error(&error),
            "field required; value is not a valid email address"
        );
    }

    #[test]
    fn plain_body_falls_back_to_error_text() {
        let error = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert_eq!(user_friendly_error(&error), error.to_string());
    }

    #[test]
    fn unauthorized_without_detail_asks_to_log_in() {
        let error = ClientError::AuthenticationFailed(String::new());
        assert!(user_friendly_error(&error).contains("log in"));
        assert!(ServiceError::from(error).is_auth_expired());
    }

    #[test]
    fn network_failure_has_generic_message() {
        let error = ClientError::NoResponse("connection refused".into());
        assert!(!user_friendly_error(&error).contains("refused"));
    }
}
