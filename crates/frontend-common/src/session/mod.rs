//! Session store: sole owner of the bearer credential
//!
//! At most one credential is live at a time. An empty store is the normal
//! logged-out state, not an error.

mod browser;
mod memory;

pub use browser::BrowserSessionStore;
pub use memory::MemorySessionStore;

use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Opaque bearer token. Never inspected or validated client-side.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No storage backend (private browsing, storage disabled)
    #[error("Session storage is unavailable")]
    Unavailable,

    /// Storage refused the write, e.g. quota exceeded
    #[error("Failed to store credential: {0}")]
    Storage(String),
}

/// Storage contract for the credential
///
/// `get` never blocks and never touches the network. `clear` is idempotent.
pub trait SessionStore {
    /// Current credential, or `None` when logged out
    fn get(&self) -> Option<Credential>;

    /// Store a credential, replacing any previous one
    fn set(&self, credential: Credential) -> Result<(), SessionError>;

    /// Drop the credential
    fn clear(&self);

    fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Store handle shared by the interceptors, the route guard and the services
pub type SharedSessionStore = Rc<dyn SessionStore>;
