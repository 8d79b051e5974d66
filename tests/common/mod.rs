#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use linguaboard::linguaboard_client::{
    ApiClient, HeaderProvider, PreparedRequest, RawResponse, TokenProvider, Transport,
};
use linguaboard::linguaboard_config::{ApiConfig, StorageConfig};
use linguaboard::linguaboard_core::ApiError;
use linguaboard::state::{AppState, init_app_state};
use serde_json::Value;
use tempfile::TempDir;

pub const BASE_URL: &str = "http://api.test";

/// Transport that records every request and answers from canned responses
/// keyed by `"METHOD /path"`. Unknown routes get a 404.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<String, RawResponse>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: &str, path: &str, response: RawResponse) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{} {}", method, path), response);
        self
    }

    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: Value) -> &Self {
        self.respond(method, path, RawResponse::json(status, &body))
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let key = format!("{} {}", request.method, request.url.path());
        self.requests.lock().unwrap().push(request);
        Ok(self
            .routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, None, Vec::new())))
    }
}

/// Token provider that counts how often it was asked.
#[derive(Default)]
pub struct CountingToken {
    pub token: Option<String>,
    pub calls: AtomicUsize,
}

impl CountingToken {
    pub fn with_token(token: &str) -> Arc<Self> {
        Arc::new(Self {
            token: Some(token.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for CountingToken {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.clone())
    }
}

/// Header provider that counts how often it was asked.
#[derive(Default)]
pub struct CountingHeaders {
    pub headers: Vec<(String, String)>,
    pub calls: AtomicUsize,
}

impl CountingHeaders {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HeaderProvider for CountingHeaders {
    async fn headers(&self) -> Result<Vec<(String, String)>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.headers.clone())
    }
}

/// Client wired to `transport` with a fixed token.
pub fn stub_client(transport: Arc<StubTransport>, token: Option<&str>) -> ApiClient {
    let token = Arc::new(CountingToken {
        token: token.map(str::to_string),
        calls: AtomicUsize::new(0),
    });
    ApiClient::builder(ApiConfig::new(BASE_URL))
        .token_provider(token)
        .transport(transport)
        .build()
        .unwrap()
}

/// Application state over a stub transport and a session file in a fresh
/// temporary directory. Keep the directory alive for the test's duration.
pub async fn stub_state(transport: Arc<StubTransport>) -> (AppState, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = init_app_state(
        ApiConfig::new(BASE_URL),
        StorageConfig::new(dir.path().join("session.json")),
        Some(transport),
    )
    .await
    .unwrap();
    (state, dir)
}

pub fn header<'a>(request: &'a PreparedRequest, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|v| v.to_str().ok())
}
