//! Route table and pre-navigation guard

use crate::session::SharedSessionStore;
use std::collections::HashMap;
use thiserror::Error;

/// Maximum redirect hops followed by [`RouteTable::resolve`]
const MAX_REDIRECTS: usize = 8;

/// A navigable path and the view it renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub view: &'static str,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub const fn public(path: &'static str, view: &'static str) -> Self {
        Self {
            path,
            view,
            requires_auth: false,
        }
    }

    pub const fn protected(path: &'static str, view: &'static str) -> Self {
        Self {
            path,
            view,
            requires_auth: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteEntry {
    View(RouteDescriptor),
    Redirect { path: &'static str, to: &'static str },
}

impl RouteEntry {
    pub const fn path(&self) -> &'static str {
        match *self {
            Self::View(descriptor) => descriptor.path,
            Self::Redirect { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("Duplicate route: {0}")]
    DuplicatePath(String),

    #[error("Redirect from {from} targets unknown route {to}")]
    UnknownTarget { from: String, to: String },

    #[error("Redirect loop starting at {0}")]
    RedirectLoop(String),
}

/// Immutable path table. Every path maps to exactly one entry.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: HashMap<&'static str, RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, RouteTableError> {
        let mut map = HashMap::new();
        for entry in entries {
            if map.insert(entry.path(), entry).is_some() {
                return Err(RouteTableError::DuplicatePath(entry.path().to_string()));
            }
        }

        let table = Self { entries: map };
        for entry in table.entries.values() {
            if let RouteEntry::Redirect { path, to } = entry {
                if !table.entries.contains_key(to) {
                    return Err(RouteTableError::UnknownTarget {
                        from: (*path).to_string(),
                        to: (*to).to_string(),
                    });
                }
                if table.follow(path).is_none() {
                    return Err(RouteTableError::RedirectLoop((*path).to_string()));
                }
            }
        }

        Ok(table)
    }

    /// Entry registered for a path, ignoring query, fragment and trailing slash
    pub fn entry(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.get(normalize(path))
    }

    /// Descriptor reached from `path` after following redirects
    pub fn resolve(&self, path: &str) -> Option<&RouteDescriptor> {
        self.follow(normalize(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn follow(&self, path: &str) -> Option<&RouteDescriptor> {
        let mut current = path;
        for _ in 0..=MAX_REDIRECTS {
            match self.entries.get(current)? {
                RouteEntry::View(descriptor) => return Some(descriptor),
                RouteEntry::Redirect { to, .. } => current = *to,
            }
        }
        None
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    }
}

/// One navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub to: String,
    pub from: Option<String>,
}

impl NavigationIntent {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: None,
        }
    }

    #[must_use]
    pub fn coming_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested path
    Proceed(String),
    /// Navigate elsewhere instead
    Redirect(String),
}

impl GuardDecision {
    /// Path the router ends up on
    pub fn target(&self) -> &str {
        match self {
            Self::Proceed(path) | Self::Redirect(path) => path,
        }
    }
}

/// Gate on credential presence for routes that require a session
///
/// Only presence is checked. A credential the backend no longer accepts still
/// passes here and is caught on the next API call by the session expiry
/// interceptor.
pub struct RouteGuard {
    table: RouteTable,
    store: SharedSessionStore,
    login_path: String,
}

impl RouteGuard {
    pub fn new(table: RouteTable, store: SharedSessionStore, login_path: impl Into<String>) -> Self {
        Self {
            table,
            store,
            login_path: login_path.into(),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn evaluate(&self, intent: &NavigationIntent) -> GuardDecision {
        let redirected = matches!(
            self.table.entry(&intent.to),
            Some(RouteEntry::Redirect { .. })
        );

        let Some(descriptor) = self.table.resolve(&intent.to) else {
            return GuardDecision::Proceed(intent.to.clone());
        };

        let decision = if descriptor.requires_auth && !self.store.is_present() {
            GuardDecision::Redirect(self.login_path.clone())
        } else if redirected {
            GuardDecision::Redirect(descriptor.path.to_string())
        } else {
            GuardDecision::Proceed(intent.to.clone())
        };

        tracing::debug!(
            to = %intent.to,
            from = ?intent.from,
            view = descriptor.view,
            decision = ?decision,
            "Route guard evaluated"
        );

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Credential, MemorySessionStore, SessionStore};
    use std::rc::Rc;

    fn table() -> RouteTable {
        RouteTable::new([
            RouteEntry::Redirect { path: "/", to: "/login" },
            RouteEntry::View(RouteDescriptor::public("/login", "login")),
            RouteEntry::View(RouteDescriptor::public("/create-account", "create-account")),
            RouteEntry::View(RouteDescriptor::protected("/dashboard", "dashboard")),
            RouteEntry::View(RouteDescriptor::protected("/profile", "profile")),
        ])
        .unwrap()
    }

    fn guard(store: &Rc<MemorySessionStore>) -> RouteGuard {
        RouteGuard::new(table(), store.clone(), "/login")
    }

    #[test]
    fn protected_route_without_session_goes_to_login() {
        let store = Rc::new(MemorySessionStore::new());
        let decision = guard(&store).evaluate(&NavigationIntent::new("/dashboard").coming_from("/"));
        assert_eq!(decision, GuardDecision::Redirect("/login".into()));
    }

    #[test]
    fn protected_route_with_session_proceeds() {
        let store = Rc::new(MemorySessionStore::with_credential("abc123"));
        let decision = guard(&store).evaluate(&NavigationIntent::new("/profile"));
        assert_eq!(decision, GuardDecision::Proceed("/profile".into()));
    }

    #[test]
    fn public_route_always_proceeds() {
        let store = Rc::new(MemorySessionStore::new());
        let decision = guard(&store).evaluate(&NavigationIntent::new("/create-account"));
        assert_eq!(decision.target(), "/create-account");
    }

    #[test]
    fn guard_reads_store_on_each_attempt() {
        let store = Rc::new(MemorySessionStore::new());
        let guard = guard(&store);
        let intent = NavigationIntent::new("/dashboard");

        assert_eq!(guard.evaluate(&intent).target(), "/login");
        store.set(Credential::new("abc123")).unwrap();
        assert_eq!(guard.evaluate(&intent).target(), "/dashboard");
        store.clear();
        assert_eq!(guard.evaluate(&intent).target(), "/login");
    }

    #[test]
    fn root_redirects_to_login() {
        let store = Rc::new(MemorySessionStore::with_credential("abc123"));
        let decision = guard(&store).evaluate(&NavigationIntent::new("/"));
        assert_eq!(decision, GuardDecision::Redirect("/login".into()));
    }

    #[test]
    fn unknown_path_proceeds() {
        let store = Rc::new(MemorySessionStore::new());
        let decision = guard(&store).evaluate(&NavigationIntent::new("/nowhere"));
        assert_eq!(decision, GuardDecision::Proceed("/nowhere".into()));
    }

    #[test]
    fn query_and_trailing_slash_are_ignored_for_lookup() {
        let store = Rc::new(MemorySessionStore::new());
        let guard = guard(&store);
        assert_eq!(guard.evaluate(&NavigationIntent::new("/dashboard/")).target(), "/login");
        assert_eq!(
            guard.evaluate(&NavigationIntent::new("/dashboard?tab=expenses")).target(),
            "/login"
        );
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let result = RouteTable::new([
            RouteEntry::View(RouteDescriptor::public("/login", "login")),
            RouteEntry::View(RouteDescriptor::protected("/login", "other")),
        ]);
        assert_eq!(result.unwrap_err(), RouteTableError::DuplicatePath("/login".into()));
    }

    #[test]
    fn redirect_to_unknown_path_is_rejected() {
        let result = RouteTable::new([RouteEntry::Redirect { path: "/", to: "/home" }]);
        assert!(matches!(result, Err(RouteTableError::UnknownTarget { .. })));
    }

    #[test]
    fn redirect_loop_is_rejected() {
        let result = RouteTable::new([
            RouteEntry::Redirect { path: "/a", to: "/b" },
            RouteEntry::Redirect { path: "/b", to: "/a" },
        ]);
        assert!(matches!(result, Err(RouteTableError::RedirectLoop(_))));
    }

    #[test]
    fn resolve_follows_redirects() {
        let table = table();
        assert_eq!(table.resolve("/").map(|d| d.view), Some("login"));
        assert_eq!(table.len(), 5);
    }
}
