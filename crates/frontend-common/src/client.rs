//! Client registry for the page

use crate::config::AppConfig;
use crate::interceptors::session_client;
use crate::navigation::SharedNavigator;
use crate::session::SharedSessionStore;
use budget_http::client::{ApiClient, ClientError};
use std::cell::RefCell;

#[derive(Clone)]
struct Session {
    client: ApiClient,
    store: SharedSessionStore,
}

thread_local! {
    /// Installed once at startup
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Build the page's API client and store it next to the session store.
/// Calling again replaces both.
pub fn init(
    config: &AppConfig,
    store: SharedSessionStore,
    navigator: SharedNavigator,
) -> Result<(), ClientError> {
    let client = session_client(config, store.clone(), navigator)?;
    tracing::info!(base_url = client.base_url(), "API client initialized");

    SESSION.with(|session| {
        *session.borrow_mut() = Some(Session { client, store });
    });
    Ok(())
}

fn current() -> Result<Session, ClientError> {
    SESSION
        .with(|session| session.borrow().clone())
        .ok_or_else(|| ClientError::Configuration("API client is not initialized".into()))
}

/// Get the API client instance
pub fn api_client() -> Result<ApiClient, ClientError> {
    current().map(|session| session.client)
}

/// Get the session store the client was built with
pub fn session_store() -> Result<SharedSessionStore, ClientError> {
    current().map(|session| session.store)
}
