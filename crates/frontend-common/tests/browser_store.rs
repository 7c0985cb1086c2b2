//! localStorage-backed session store, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use budget_frontend_common::{AppConfig, BrowserSessionStore, Credential, SessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn set_get_clear_round_trip() {
    let store = BrowserSessionStore::with_key("token-test-roundtrip");
    store.clear();
    assert!(!store.is_present());

    store.set(Credential::new("abc123")).unwrap();
    assert_eq!(store.get(), Some(Credential::new("abc123")));

    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}

#[wasm_bindgen_test]
fn uses_token_key_by_default() {
    let store = BrowserSessionStore::from_config(&AppConfig::new("http://localhost:8000"));
    assert_eq!(store.key(), "token");

    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .unwrap();
    storage.set_item("token", "from-another-flow").unwrap();

    assert_eq!(store.get(), Some(Credential::new("from-another-flow")));
    store.clear();
    assert_eq!(storage.get_item("token").unwrap(), None);
}

#[wasm_bindgen_test]
fn empty_value_is_logged_out() {
    let store = BrowserSessionStore::with_key("token-test-empty");
    store.set(Credential::new("")).unwrap();
    assert!(!store.is_present());
    store.clear();
}
