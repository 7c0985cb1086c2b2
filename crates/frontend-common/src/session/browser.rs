use super::{Credential, SessionError, SessionStore};
use crate::config::AppConfig;
use web_sys::Storage;

/// Credential kept under a single `localStorage` key
///
/// Survives reloads and is shared by every tab of the origin. Other tabs are
/// not notified of changes; a stale tab finds out on its next rejected
/// request.
#[derive(Debug, Clone)]
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    /// Store under the key named by the page configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_key(config.token_storage_key.as_str())
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Option<Credential> {
        let storage = get_local_storage()?;
        storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(Credential::new)
    }

    fn set(&self, credential: Credential) -> Result<(), SessionError> {
        let storage = get_local_storage().ok_or(SessionError::Unavailable)?;
        storage
            .set_item(&self.key, credential.as_str())
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                tracing::warn!(key = %self.key, error = ?e, "Failed to remove credential");
            }
        }
    }
}
