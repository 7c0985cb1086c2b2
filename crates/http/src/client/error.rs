//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication failed or the presented credential is no longer accepted
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Server returned any other non-2xx status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Request was sent but no response arrived
    #[error("No response received: {0}")]
    NoResponse(String),

    /// Request could not be constructed or sent
    #[error("Request setup failed: {0}")]
    Setup(String),

    /// Successful response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Outcome category of a failed exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A response arrived with a non-2xx status
    Response { status: u16 },
    /// The request went out but nothing came back
    NoResponse,
    /// The request never left the client
    Setup,
    /// A 2xx body did not match the expected shape
    Decode,
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Status code of the response, if one arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify the failure. A status is only meaningful once we know a
    /// response arrived, so that is checked first.
    pub fn kind(&self) -> FailureKind {
        if let Some(status) = self.status() {
            return FailureKind::Response { status };
        }
        match self {
            Self::NoResponse(_) => FailureKind::NoResponse,
            Self::Decode(_) => FailureKind::Decode,
            _ => FailureKind::Setup,
        }
    }

    /// Whether the backend rejected the credential (401)
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Raw message, which for server-answered failures is the response body
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. }
            | Self::NoResponse(message)
            | Self::Setup(message)
            | Self::Decode(message)
            | Self::Configuration(message) => message,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::Setup(error.to_string())
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::NoResponse(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
