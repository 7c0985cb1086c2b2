mod app;
mod auth_guard;
mod routes;
mod views;

use app::{App, AppProps};
use budget_frontend_common::{
    AppConfig, BrowserSessionStore, HistoryNavigator, RouteGuard, SharedSessionStore, logging,
};
use std::rc::Rc;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = AppConfig::from_env();
    let store: SharedSessionStore = Rc::new(BrowserSessionStore::from_config(&config));

    if let Err(error) = budget_frontend_common::init(&config, store.clone(), Rc::new(HistoryNavigator)) {
        tracing::error!(%error, "Failed to initialize API client");
        return;
    }

    let table = match routes::route_table() {
        Ok(table) => table,
        Err(error) => {
            tracing::error!(%error, "Invalid route table");
            return;
        }
    };

    let guard = Rc::new(RouteGuard::new(table, store, &config.login_path));
    yew::Renderer::<App>::with_props(AppProps { guard }).render();
}
