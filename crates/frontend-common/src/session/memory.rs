use super::{Credential, SessionError, SessionStore};
use std::cell::RefCell;

/// In-memory store, for tests and for pages without usable storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    credential: RefCell<Option<Credential>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token
    pub fn with_credential(token: impl Into<String>) -> Self {
        Self {
            credential: RefCell::new(Some(Credential::new(token))),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Credential> {
        self.credential
            .borrow()
            .clone()
            .filter(|credential| !credential.as_str().is_empty())
    }

    fn set(&self, credential: Credential) -> Result<(), SessionError> {
        *self.credential.borrow_mut() = Some(credential);
        Ok(())
    }

    fn clear(&self) {
        self.credential.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        assert_eq!(MemorySessionStore::new().get(), None);
    }

    #[test]
    fn set_overwrites_previous_credential() {
        let store = MemorySessionStore::with_credential("old");
        store.set(Credential::new("new")).unwrap();
        assert_eq!(store.get(), Some(Credential::new("new")));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemorySessionStore::with_credential("abc123");
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
        assert!(!store.is_present());
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = MemorySessionStore::with_credential("");
        assert!(!store.is_present());
    }
}
