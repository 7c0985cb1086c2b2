//! Process-wide HTTP configuration: base URL and default headers

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

/// Base URL and headers applied to every request built by an [`ApiClient`]
///
/// [`ApiClient`]: super::ApiClient
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    default_headers: HeaderMap,
}

impl ClientConfig {
    /// Create a configuration with the JSON content type as default header
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Self {
            // Paths always start with '/'
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers,
        }
    }

    /// Add or replace a default header
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
