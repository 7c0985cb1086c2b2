//! Session-aware interceptors for the API client

use crate::config::AppConfig;
use crate::navigation::SharedNavigator;
use crate::session::SharedSessionStore;
use budget_http::client::{
    ApiClient, ClientError, FailureKind, Outcome, RequestInterceptor, ResponseInterceptor,
};
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

/// Attaches `Authorization: Bearer <token>` when a credential is stored.
/// Without one, the request is left untouched.
pub struct BearerAuth {
    store: SharedSessionStore,
}

impl BearerAuth {
    pub fn new(store: SharedSessionStore) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, mut request: Request) -> Result<Request, ClientError> {
        let Some(credential) = self.store.get() else {
            return Ok(request);
        };

        let mut value = HeaderValue::from_str(&credential.bearer())
            .map_err(|e| ClientError::Setup(format!("Credential is not a valid header value: {e}")))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);

        Ok(request)
    }
}

/// Logs every failed exchange and reacts to a rejected credential (401) by
/// clearing the store and sending the router to the login page.
///
/// The failure is always handed back to the caller; the view that issued the
/// request decides what to show.
pub struct SessionExpiry {
    store: SharedSessionStore,
    navigator: SharedNavigator,
    login_path: String,
}

impl SessionExpiry {
    pub fn new(
        store: SharedSessionStore,
        navigator: SharedNavigator,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            login_path: login_path.into(),
        }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn on_response(&self, outcome: Outcome) -> Outcome {
        if let Err(error) = &outcome {
            match error.kind() {
                FailureKind::Response { status } => {
                    tracing::error!(status, body = error.message(), "Error response");
                    if status == 401 {
                        tracing::info!("Credential rejected by backend, ending session");
                        self.store.clear();
                        self.navigator.push(&self.login_path);
                    }
                }
                FailureKind::NoResponse => {
                    tracing::error!(error = %error, "No response received");
                }
                FailureKind::Setup => {
                    tracing::error!(error = %error, "Request setup failed");
                }
                FailureKind::Decode => {
                    tracing::error!(error = %error, "Response could not be decoded");
                }
            }
        }
        outcome
    }
}

/// API client for the page: credential stamped on the way out, session
/// expiry handled on the way back
pub fn session_client(
    config: &AppConfig,
    store: SharedSessionStore,
    navigator: SharedNavigator,
) -> Result<ApiClient, ClientError> {
    ApiClient::builder()
        .base_url(&config.api_base_url)
        .request_interceptor(BearerAuth::new(store.clone()))
        .response_interceptor(SessionExpiry::new(store, navigator, &config.login_path))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::session::{Credential, MemorySessionStore, SessionStore};
    use reqwest::{Method, Url};
    use std::rc::Rc;

    fn request() -> Request {
        Request::new(
            Method::GET,
            Url::parse("http://localhost:8000/api/budgets").unwrap(),
        )
    }

    fn expiry(
        store: &Rc<MemorySessionStore>,
        navigator: &Rc<RecordingNavigator>,
    ) -> SessionExpiry {
        SessionExpiry::new(store.clone(), navigator.clone(), "/login")
    }

    #[test]
    fn attaches_bearer_header_when_logged_in() {
        let store = Rc::new(MemorySessionStore::with_credential("abc123"));
        let request = BearerAuth::new(store).on_request(request()).unwrap();

        let header = request.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header, "Bearer abc123");
        assert!(header.is_sensitive());
    }

    #[test]
    fn leaves_request_alone_when_logged_out() {
        let store = Rc::new(MemorySessionStore::new());
        let request = BearerAuth::new(store).on_request(request()).unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn header_follows_latest_credential() {
        let store = Rc::new(MemorySessionStore::with_credential("first"));
        let auth = BearerAuth::new(store.clone());
        store.set(Credential::new("second")).unwrap();

        let request = auth.on_request(request()).unwrap();
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer second");
    }

    #[test]
    fn unencodable_credential_is_setup_failure() {
        let store = Rc::new(MemorySessionStore::with_credential("bad\ntoken"));
        let result = BearerAuth::new(store).on_request(request());
        assert!(matches!(result, Err(ClientError::Setup(_))));
    }

    #[test]
    fn unauthorized_clears_session_and_redirects() {
        let store = Rc::new(MemorySessionStore::with_credential("abc123"));
        let navigator = Rc::new(RecordingNavigator::new());

        let outcome = expiry(&store, &navigator)
            .on_response(Err(ClientError::AuthenticationFailed("expired".into())));

        assert!(matches!(outcome, Err(ClientError::AuthenticationFailed(_))));
        assert_eq!(store.get(), None);
        assert_eq!(navigator.pushes(), vec!["/login".to_string()]);
    }

    #[test]
    fn other_statuses_leave_session_alone() {
        for status in [400u16, 403, 404, 500, 503] {
            let store = Rc::new(MemorySessionStore::with_credential("abc123"));
            let navigator = Rc::new(RecordingNavigator::new());
            let error = ClientError::from_status(
                reqwest::StatusCode::from_u16(status).unwrap(),
                "nope".into(),
            );

            let outcome = expiry(&store, &navigator).on_response(Err(error));

            assert_eq!(outcome.unwrap_err().status(), Some(status));
            assert_eq!(store.get(), Some(Credential::new("abc123")));
            assert!(navigator.pushes().is_empty());
        }
    }

    #[test]
    fn transport_failures_leave_session_alone() {
        let store = Rc::new(MemorySessionStore::with_credential("abc123"));
        let navigator = Rc::new(RecordingNavigator::new());
        let interceptor = expiry(&store, &navigator);

        let outcome = interceptor.on_response(Err(ClientError::NoResponse("offline".into())));
        assert!(matches!(outcome, Err(ClientError::NoResponse(_))));

        let outcome = interceptor.on_response(Err(ClientError::Setup("bad url".into())));
        assert!(matches!(outcome, Err(ClientError::Setup(_))));

        assert!(store.is_present());
        assert!(navigator.pushes().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn success_passes_through() {
        let store = Rc::new(MemorySessionStore::with_credential("abc123"));
        let navigator = Rc::new(RecordingNavigator::new());
        let response = reqwest::Response::from(
            http::Response::builder().status(200).body("ok").unwrap(),
        );

        let outcome = expiry(&store, &navigator).on_response(Ok(response));

        assert_eq!(outcome.unwrap().status(), 200);
        assert!(store.is_present());
        assert!(navigator.pushes().is_empty());
    }
}
