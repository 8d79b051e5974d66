//! The API client.
//!
//! [`ApiClient`] is constructed explicitly and passed to every service call.
//! It holds an immutable snapshot of the configuration together with the
//! token provider, header provider and transport, all behind one `Arc` so
//! the client is cheap to clone and safe to share across tasks.

use std::sync::Arc;

use async_trait::async_trait;
use linguaboard_config::ApiConfig;
use linguaboard_core::ApiError;
use serde::de::DeserializeOwned;
use tracing::{Instrument, Span, debug, field, info_span, warn};
use uuid::Uuid;

use crate::cancel::{ApiCall, CancelHandle};
use crate::endpoints::Endpoint;
use crate::request::{
    PreparedRequest, RequestParams, build_headers, build_url, check_request, map_response,
    prepare_body,
};
use crate::transport::{ReqwestTransport, Transport};

/// Supplies the bearer token for each request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// `None` or an empty token means the request is sent unauthenticated.
    async fn token(&self) -> Result<Option<String>, ApiError>;
}

/// Supplies extra headers for each request.
#[async_trait]
pub trait HeaderProvider: Send + Sync {
    async fn headers(&self) -> Result<Vec<(String, String)>, ApiError>;
}

/// A fixed token, or none.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(self.0.clone())
    }
}

/// A fixed header list.
#[derive(Debug, Clone, Default)]
pub struct StaticHeaders(pub Vec<(String, String)>);

#[async_trait]
impl HeaderProvider for StaticHeaders {
    async fn headers(&self) -> Result<Vec<(String, String)>, ApiError> {
        Ok(self.0.clone())
    }
}

struct Inner {
    config: ApiConfig,
    token_provider: Arc<dyn TokenProvider>,
    header_provider: Arc<dyn HeaderProvider>,
    transport: Arc<dyn Transport>,
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.config.base_url)
            .finish_non_exhaustive()
    }
}

pub struct ApiClientBuilder {
    config: ApiConfig,
    token_provider: Arc<dyn TokenProvider>,
    header_provider: Arc<dyn HeaderProvider>,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiClientBuilder {
    #[must_use]
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = provider;
        self
    }

    #[must_use]
    pub fn header_provider(mut self, provider: Arc<dyn HeaderProvider>) -> Self {
        self.header_provider = provider;
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Finishes the client, creating a [`ReqwestTransport`] when no transport
    /// was supplied.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };

        Ok(ApiClient {
            inner: Arc::new(Inner {
                config: self.config,
                token_provider: self.token_provider,
                header_provider: self.header_provider,
                transport,
            }),
        })
    }
}

impl ApiClient {
    pub fn builder(config: ApiConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            token_provider: Arc::new(StaticToken::default()),
            header_provider: Arc::new(StaticHeaders::default()),
            transport: None,
        }
    }

    /// Client with no token, no extra headers and the reqwest transport.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Self::builder(config).build()
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Issues one request against `endpoint` and decodes the 2xx body as `T`.
    ///
    /// Nothing happens until the returned call is awaited. Providers are
    /// consulted only once the call starts, and not at all if it was
    /// cancelled first.
    pub fn call<T>(&self, endpoint: &'static Endpoint, params: RequestParams) -> ApiCall<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let span = info_span!(
            "http.client",
            request_id = %Uuid::new_v4(),
            operation = endpoint.name,
            http.method = %endpoint.method,
            http.url = field::Empty,
            http.status = field::Empty,
        );

        ApiCall::new(
            CancelHandle::new(),
            async move { inner.execute(endpoint, params).await }.instrument(span),
        )
    }
}

impl Inner {
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &'static Endpoint,
        params: RequestParams,
    ) -> Result<T, ApiError> {
        check_request(endpoint, &params)
            .inspect_err(|e| warn!(error = %e, "Request rejected before sending"))?;

        let token = self.token_provider.token().await?;
        let provider_headers = self.header_provider.headers().await?;

        let url = build_url(&self.config.base_url, endpoint, &params.path, &params.query)?;
        Span::current().record("http.url", url.as_str());

        let headers = build_headers(
            &provider_headers,
            &params.headers,
            token.as_deref(),
            &params.body,
        )?;
        let body = prepare_body(params.body)?;

        debug!("Sending request");
        let response = self
            .transport
            .execute(PreparedRequest {
                method: endpoint.method.clone(),
                url: url.clone(),
                headers,
                body,
            })
            .await
            .inspect_err(|e| warn!(error = %e, "Request failed"))?;
        Span::current().record("http.status", response.status.as_u16());

        let value = map_response(endpoint, &url, response)
            .inspect_err(|e| warn!(error = %e, "Request rejected"))?;

        serde_json::from_value(value).map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints;
    use crate::request::RawResponse;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<PreparedRequest>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
            self.requests.lock().unwrap().push(request);
            Ok(RawResponse::json(200, &json!([{"_id": "1", "code": "EN", "name": "English"}])))
        }
    }

    #[tokio::test]
    async fn test_call_uses_config_and_token() {
        let recorder = Arc::new(Recorder::default());
        let client = ApiClient::builder(ApiConfig::new("http://api.test"))
            .token_provider(Arc::new(StaticToken::new("secret")))
            .transport(recorder.clone())
            .build()
            .unwrap();

        let languages: Vec<Value> = client
            .call(&endpoints::LANGUAGES_LIST, RequestParams::new())
            .await
            .unwrap();
        assert_eq!(languages.len(), 1);

        let requests = recorder.requests.lock().unwrap();
        assert_eq!(requests[0].url.as_str(), "http://api.test/api/languages");
        assert_eq!(requests[0].headers["authorization"], "Bearer secret");
    }

    #[tokio::test]
    async fn test_decode_error() {
        let client = ApiClient::builder(ApiConfig::default())
            .transport(Arc::new(Recorder::default()))
            .build()
            .unwrap();

        let result: Result<String, _> = client
            .call(&endpoints::LANGUAGES_LIST, RequestParams::new())
            .await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_debug_hides_providers() {
        let client = ApiClient::builder(ApiConfig::new("http://api.test"))
            .transport(Arc::new(Recorder::default()))
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("http://api.test"));
    }
}
