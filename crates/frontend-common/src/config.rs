//! Frontend configuration

/// Application configuration, fixed for the lifetime of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin; empty means same-origin relative URLs
    pub api_base_url: String,
    /// `localStorage` key holding the credential
    pub token_storage_key: String,
    /// Where the router is sent when the session is missing or rejected
    pub login_path: String,
}

impl AppConfig {
    /// Storage key for the bearer token
    pub const TOKEN_STORAGE_KEY: &'static str = "token";

    /// Login route path
    pub const LOGIN_PATH: &'static str = "/login";

    /// Configuration for an explicit backend URL
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            token_storage_key: Self::TOKEN_STORAGE_KEY.to_string(),
            login_path: Self::LOGIN_PATH.to_string(),
        }
    }

    /// Configuration baked in at build time. The bundle is static, so the
    /// backend URL comes from `BUDGET_API_URL` when compiling and falls back
    /// to the page origin.
    pub fn from_env() -> Self {
        let api_base_url = option_env!("BUDGET_API_URL")
            .map(str::to_string)
            .unwrap_or_else(page_origin);
        Self::new(api_base_url)
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    String::new()
}
