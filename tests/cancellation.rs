mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use common::{BASE_URL, CountingHeaders, CountingToken, StubTransport};
use linguaboard::linguaboard_client::endpoints;
use linguaboard::linguaboard_client::services::LanguageService;
use linguaboard::linguaboard_client::{
    ApiClient, CallState, PreparedRequest, RawResponse, RequestParams, Transport,
};
use linguaboard::linguaboard_config::ApiConfig;
use linguaboard::linguaboard_core::ApiError;
use serde_json::{Value, json};

/// Transport that never answers within a test's lifetime.
#[derive(Default)]
struct SlowTransport {
    started: AtomicUsize,
}

#[async_trait]
impl Transport for SlowTransport {
    async fn execute(&self, _request: PreparedRequest) -> Result<RawResponse, ApiError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(RawResponse::json(200, &json!([])))
    }
}

fn client_with(
    transport: Arc<dyn Transport>,
    token: Arc<CountingToken>,
    headers: Arc<CountingHeaders>,
) -> ApiClient {
    ApiClient::builder(ApiConfig::new(BASE_URL))
        .token_provider(token)
        .header_provider(headers)
        .transport(transport)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_cancel_before_await_skips_providers_and_transport() {
    let transport = StubTransport::new();
    transport.respond_json("GET", "/api/languages", 200, json!([]));
    let token = CountingToken::with_token("tok");
    let headers = Arc::new(CountingHeaders::default());
    let client = client_with(transport.clone(), token.clone(), headers.clone());

    let call = LanguageService::list(&client);
    assert!(call.cancel());
    let result = call.await;

    assert!(matches!(result, Err(ApiError::Cancelled)));
    assert_eq!(token.calls(), 0);
    assert_eq!(headers.calls(), 0);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_cancel_after_settlement_is_a_no_op() {
    let transport = StubTransport::new();
    transport.respond_json(
        "GET",
        "/api/languages",
        200,
        json!([{"_id": "1", "code": "EN", "name": "English"}]),
    );
    let token = CountingToken::with_token("tok");
    let headers = Arc::new(CountingHeaders::default());
    let client = client_with(transport.clone(), token.clone(), headers.clone());

    let call = LanguageService::list(&client);
    let handle = call.cancel_handle();
    let languages = call.await.unwrap();

    assert_eq!(languages.len(), 1);
    assert_eq!(handle.state(), CallState::Settled);
    assert!(!handle.cancel());
    assert_eq!(handle.state(), CallState::Settled);
    assert_eq!(token.calls(), 1);
    assert_eq!(headers.calls(), 1);
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let transport = Arc::new(SlowTransport::default());
    let token = CountingToken::with_token("tok");
    let headers = Arc::new(CountingHeaders::default());
    let client = client_with(transport.clone(), token.clone(), headers);

    let call = LanguageService::list(&client);
    let handle = call.cancel_handle();
    let task = tokio::spawn(call);

    while transport.started.load(Ordering::SeqCst) == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(handle.cancel());

    let result = tokio::time::timeout(Duration::from_secs(2), task)
        .await
        .expect("cancelled call should resolve promptly")
        .unwrap();
    assert!(matches!(result, Err(ApiError::Cancelled)));
    assert_eq!(token.calls(), 1);
    assert_eq!(handle.state(), CallState::Cancelled);
}

#[tokio::test]
async fn test_independent_calls_cancel_independently() {
    let transport = StubTransport::new();
    transport.respond_json("GET", "/api/languages", 200, json!([]));
    let client = common::stub_client(transport.clone(), None);

    let first = LanguageService::list(&client);
    let second = LanguageService::list(&client);
    assert!(first.cancel());

    assert!(first.await.unwrap_err().is_cancelled());
    assert!(second.await.unwrap().is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_body_of_wrong_media_type_fails_before_providers() {
    let transport = StubTransport::new();
    transport.respond_json("POST", "/api/domaines", 201, json!({"data": {}}));
    let token = CountingToken::with_token("tok");
    let headers = Arc::new(CountingHeaders::default());
    let client = client_with(transport.clone(), token.clone(), headers.clone());

    let params = RequestParams::new()
        .json(&json!({"name": "Animals"}))
        .unwrap();
    let result: Result<Value, _> = client.call(&endpoints::DOMAINS_CREATE, params).await;

    match result {
        Err(ApiError::MediaTypeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, "multipart/form-data");
            assert_eq!(actual, "application/json");
        }
        other => panic!("expected MediaTypeMismatch, got {:?}", other),
    }
    assert_eq!(token.calls(), 0);
    assert_eq!(headers.calls(), 0);
    assert!(transport.requests().is_empty());
}
