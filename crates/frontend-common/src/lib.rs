//! Authenticated session layer shared by the Budget Buddy web frontend
//!
//! The session store owns the bearer credential. Two interceptors sit in the
//! HTTP client pipeline: one stamps outgoing requests with the credential,
//! the other classifies failures and, when the backend rejects the
//! credential, clears the store and sends the router to the login page. The
//! route guard reads the same store before every navigation.

pub mod client;
pub mod components;
pub mod config;
pub mod errors;
pub mod guard;
pub mod interceptors;
pub mod logging;
pub mod navigation;
pub mod services;
pub mod session;

pub use client::{api_client, init, session_store};
pub use config::AppConfig;
pub use errors::{ServiceError, user_friendly_error};
pub use guard::{
    GuardDecision, NavigationIntent, RouteDescriptor, RouteEntry, RouteGuard, RouteTable,
    RouteTableError,
};
pub use interceptors::{BearerAuth, SessionExpiry, session_client};
pub use navigation::{HistoryNavigator, Navigate, RecordingNavigator, SharedNavigator};
pub use session::{
    BrowserSessionStore, Credential, MemorySessionStore, SessionError, SessionStore,
    SharedSessionStore,
};
