//! Integration tests for the Budget Buddy HTTP client

#![cfg(feature = "client")]

use budget_http::client::{ApiClient, ClientError, FailureKind, Outcome};
use budget_http::types::{BudgetSetup, ExpenseCreate, LoginRequest};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:8000/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/budget/summary"))
        .and(header("content-type", "application/json"))
        .and(header("x-client", "budget-web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "income": 1000.0,
            "savings_goal": 100.0,
            "categories": {"food": 300.0},
            "expenses": {"food": 50.0},
            "remaining": 850.0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .header(
            HeaderName::from_static("x-client"),
            HeaderValue::from_static("budget-web"),
        )
        .build()
        .unwrap();

    let summary = client.budget_summary().await.unwrap();
    assert_eq!(summary.remaining, 850.0);
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "ada", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ada",
            "token_type": "bearer"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let response = client
        .login(&LoginRequest {
            username: "ada".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.access_token, "ada");
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/profile/info"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid authorization header"})),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let result = client.profile_info().await;

    let err = result.unwrap_err();
    assert!(err.is_auth_expired());
    assert!(err.message().contains("Invalid authorization header"));
}

#[tokio::test]
async fn test_server_error_keeps_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/budget/expense"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let result = client
        .add_expense(&ExpenseCreate {
            category: "food".into(),
            amount: 12.0,
            description: "lunch".into(),
        })
        .await;

    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_response_is_classified() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1").unwrap();
    let err = client.list_expenses().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::NoResponse);
}

#[tokio::test]
async fn test_malformed_url_is_setup_failure() {
    let client = ApiClient::new("not a url").unwrap();
    let err = client.budget_summary().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Setup);
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/budget/expenses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let err = client.list_expenses().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Decode);
}

#[tokio::test]
async fn test_interceptors_wrap_transmission() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/budget/setup"))
        .and(header("x-trace", "1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Total allocation exceeds income"})))
        .mount(&mock_server)
        .await;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = {
        let seen = seen.clone();
        move |outcome: Outcome| {
            if let Err(error) = &outcome {
                seen.borrow_mut().push(error.kind());
            }
            outcome
        }
    };

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .request_interceptor(|mut request: reqwest::Request| -> Result<reqwest::Request, ClientError> {
            request
                .headers_mut()
                .insert("x-trace", HeaderValue::from_static("1"));
            Ok(request)
        })
        .response_interceptor(recorder)
        .build()
        .unwrap();

    let result = client.setup_budget(&BudgetSetup::default()).await;

    assert!(matches!(result, Err(ClientError::BadRequest(_))));
    assert_eq!(*seen.borrow(), vec![FailureKind::Response { status: 400 }]);
}

#[tokio::test]
async fn test_rejecting_interceptor_skips_transmission() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::builder()
        .base_url(mock_server.uri())
        .request_interceptor(|_: reqwest::Request| -> Result<reqwest::Request, ClientError> {
            Err(ClientError::Setup("rejected".into()))
        })
        .build()
        .unwrap();

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Setup(ref m) if m == "rejected"));
}

#[tokio::test]
async fn test_execute_empty_ignores_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/budget/expense/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let request = client.request(reqwest::Method::DELETE, "/api/budget/expense/7");

    client.execute_empty(request).await.unwrap();
}
