//! Request preparation and response mapping.
//!
//! Turns an [`Endpoint`] plus [`RequestParams`] into a [`PreparedRequest`]
//! ready for a [`Transport`](crate::transport::Transport), and turns the
//! transport's [`RawResponse`] back into either a JSON value or an
//! [`ApiError::Status`].

use std::collections::BTreeMap;

use linguaboard_core::{ApiError, FormData, QueryParams};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;

use crate::endpoints::{Endpoint, MediaType};

/// Messages used when the endpoint declares nothing for a status.
const DEFAULT_ERRORS: [(u16, &str); 7] = [
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (500, "Internal Server Error"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
];

/// Body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(FormData),
}

impl RequestBody {
    /// Media type this body is sent as, `None` when there is no body.
    #[must_use]
    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(MediaType::Json),
            Self::Multipart(_) => Some(MediaType::Multipart),
        }
    }
}

/// Per-call parameters for an endpoint.
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    pub path: BTreeMap<String, String>,
    pub query: QueryParams,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn path(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path.insert(name.into(), value.to_string());
        self
    }

    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Serializes `body` as the JSON payload.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    #[must_use]
    pub fn form(mut self, form: FormData) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Encoded body handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedBody {
    Empty,
    Json(Vec<u8>),
    /// Encoded by the transport, which also sets the boundary header.
    Multipart(FormData),
}

/// A fully resolved request.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: PreparedBody,
}

/// What the transport got back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            content_type: content_type.map(str::to_owned),
            body: body.into(),
        }
    }

    /// Shorthand for a JSON response.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, Some("application/json"), body.to_string())
    }
}

/// Checks call parameters against the endpoint declaration.
///
/// Every `{name}` in the path must be supplied, and a body must use the
/// endpoint's media type. An empty body is always accepted.
pub fn check_request(endpoint: &Endpoint, params: &RequestParams) -> Result<(), ApiError> {
    if let Some(missing) = endpoint
        .path_params()
        .find(|name| !params.path.contains_key(*name))
    {
        return Err(ApiError::MissingPathParam(missing.to_string()));
    }

    match (endpoint.media_type, params.body.media_type()) {
        (_, None) => Ok(()),
        (Some(expected), Some(actual)) if expected == actual => Ok(()),
        (expected, Some(actual)) => Err(ApiError::MediaTypeMismatch {
            endpoint: endpoint.name.to_string(),
            expected: expected.map_or("no body", |m| m.as_str()).to_string(),
            actual: actual.as_str().to_string(),
        }),
    }
}

/// Builds the absolute URL: base URL, path template with substituted
/// parameters, then the expanded query.
pub fn build_url(
    base_url: &str,
    endpoint: &Endpoint,
    path_params: &BTreeMap<String, String>,
    query: &QueryParams,
) -> Result<Url, ApiError> {
    let base = base_url.trim_end_matches('/');
    let mut url = Url::parse(base).map_err(|e| ApiError::InvalidUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    {
        let mut segments = url.path_segments_mut().map_err(|()| ApiError::InvalidUrl {
            url: base.to_string(),
            reason: "cannot be a base URL".to_string(),
        })?;
        segments.pop_if_empty();
        for segment in endpoint.path.trim_start_matches('/').split('/') {
            segments.push(&substitute(segment, path_params)?);
        }
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query.pairs() {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

/// Replaces every `{name}` in one path segment.
fn substitute(segment: &str, params: &BTreeMap<String, String>) -> Result<String, ApiError> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        let value = params
            .get(name)
            .ok_or_else(|| ApiError::MissingPathParam(name.to_string()))?;
        out.push_str(&rest[..start]);
        out.push_str(value);
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Assembles headers in precedence order: `Accept`, provider headers,
/// per-call headers, bearer token, then the JSON content type.
pub fn build_headers(
    provider_headers: &[(String, String)],
    call_headers: &[(String, String)],
    token: Option<&str>,
    body: &RequestBody,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for (name, value) in provider_headers.iter().chain(call_headers) {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(ApiError::provider)?;
        let value = HeaderValue::from_str(value).map_err(ApiError::provider)?;
        headers.insert(name, value);
    }

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let value =
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(ApiError::provider)?;
        headers.insert(AUTHORIZATION, value);
    }

    match body {
        RequestBody::Json(_) => {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        RequestBody::Multipart(_) => {
            headers.remove(CONTENT_TYPE);
        }
        RequestBody::Empty => {}
    }

    Ok(headers)
}

pub fn prepare_body(body: RequestBody) -> Result<PreparedBody, ApiError> {
    Ok(match body {
        RequestBody::Empty => PreparedBody::Empty,
        RequestBody::Json(value) => {
            PreparedBody::Json(serde_json::to_vec(&value).map_err(ApiError::Encode)?)
        }
        RequestBody::Multipart(form) => PreparedBody::Multipart(form),
    })
}

/// Parses a response body according to its content type.
///
/// JSON is parsed, text is returned as a JSON string and an empty body is
/// `null`. Anything else is tried as JSON first.
pub fn parse_body(response: &RawResponse) -> Value {
    if response.body.is_empty() {
        return Value::Null;
    }

    let content_type = response
        .content_type
        .as_deref()
        .unwrap_or_default()
        .to_ascii_lowercase();
    let text = || String::from_utf8_lossy(&response.body).into_owned();

    if content_type.contains("json") {
        serde_json::from_slice(&response.body).unwrap_or_else(|_| Value::String(text()))
    } else if content_type.starts_with("text/") {
        Value::String(text())
    } else {
        serde_json::from_slice(&response.body).unwrap_or_else(|_| Value::String(text()))
    }
}

/// Maps a response to its JSON body on 2xx, or to the status error.
pub fn map_response(
    endpoint: &Endpoint,
    url: &Url,
    response: RawResponse,
) -> Result<Value, ApiError> {
    let body = parse_body(&response);
    let status = response.status;

    if status.is_success() {
        return Ok(body);
    }

    let code = status.as_u16();
    let status_text = status.canonical_reason().unwrap_or_default().to_string();
    let message = endpoint
        .error_message(code)
        .or_else(|| default_message(code))
        .map(str::to_owned)
        .unwrap_or_else(|| {
            format!(
                "Generic Error: status: {}; status text: {}; body: {}",
                code,
                status_text,
                render_body(&body)
            )
        });

    Err(ApiError::Status {
        status: code,
        status_text,
        message,
        body,
        method: endpoint.method.to_string(),
        url: url.to_string(),
    })
}

fn default_message(status: u16) -> Option<&'static str> {
    DEFAULT_ERRORS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, message)| *message)
}

fn render_body(body: &Value) -> String {
    match body {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints;
    use linguaboard_core::FilePart;
    use serde_json::json;

    const BASE: &str = "http://localhost:3001";

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_check_request_accepts_declared_media_type() {
        let json = RequestParams::new().json(&json!({"name": "French"})).unwrap();
        assert!(check_request(&endpoints::LANGUAGES_CREATE, &json).is_ok());

        let form = RequestParams::new().form(FormData::new().text("name", "Animals"));
        assert!(check_request(&endpoints::DOMAINS_CREATE, &form).is_ok());

        let empty = RequestParams::new();
        assert!(check_request(&endpoints::LANGUAGES_CREATE, &empty).is_ok());
    }

    #[test]
    fn test_check_request_rejects_json_for_multipart_endpoint() {
        let params = RequestParams::new()
            .json(&json!({"name": "Animals"}))
            .unwrap();
        let err = check_request(&endpoints::DOMAINS_CREATE, &params).unwrap_err();
        assert!(matches!(
            &err,
            ApiError::MediaTypeMismatch { expected, actual, .. }
                if expected == "multipart/form-data" && actual == "application/json"
        ));
        assert!(err.to_string().starts_with(endpoints::DOMAINS_CREATE.name));
    }

    #[test]
    fn test_check_request_rejects_body_for_bodyless_endpoint() {
        let params = RequestParams::new()
            .path("id", "p1")
            .json(&json!({"active": true}))
            .unwrap();
        let err = check_request(&endpoints::PARENTS_ACTIVATE, &params).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MediaTypeMismatch { expected, .. } if expected == "no body"
        ));
    }

    #[test]
    fn test_check_request_missing_path_param() {
        let err = check_request(&endpoints::LANGUAGES_GET, &RequestParams::new()).unwrap_err();
        assert!(matches!(err, ApiError::MissingPathParam(name) if name == "id"));
    }

    #[test]
    fn test_build_url_substitutes_path_params() {
        let url = build_url(
            BASE,
            &endpoints::LESSONS_CONTENT,
            &params(&[("domainId", "d42"), ("lessonNumber", "3")]),
            &QueryParams::new(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/api/lesson/d42/3");
        assert!(!url.as_str().contains('{'));
    }

    #[test]
    fn test_build_url_missing_path_param() {
        let err = build_url(
            BASE,
            &endpoints::CHILDREN_REMOVE_LANGUAGE,
            &params(&[("childId", "c1")]),
            &QueryParams::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingPathParam(name) if name == "languageId"));
    }

    #[test]
    fn test_build_url_encodes_path_values() {
        let url = build_url(
            BASE,
            &endpoints::LANGUAGES_GET,
            &params(&[("id", "a/b c")]),
            &QueryParams::new(),
        )
        .unwrap();
        assert_eq!(url.path(), "/api/languages/a%2Fb%20c");
    }

    #[test]
    fn test_build_url_keeps_base_prefix() {
        let url = build_url(
            "https://example.com/backend/",
            &endpoints::LANGUAGES_LIST,
            &BTreeMap::new(),
            &QueryParams::new(),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://example.com/backend/api/languages");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_build_url_query() {
        let query = QueryParams::new()
            .with("page", 2)
            .with_opt("search", None::<&str>)
            .with_list("status", ["active", "inactive"])
            .with("isActive", true);
        let url = build_url(BASE, &endpoints::LESSONS_ADMIN_LIST, &BTreeMap::new(), &query)
            .unwrap();
        assert_eq!(
            url.query(),
            Some("page=2&status=active&status=inactive&isActive=true")
        );
    }

    #[test]
    fn test_build_url_rejects_bad_base() {
        let err = build_url(
            "not a url",
            &endpoints::LANGUAGES_LIST,
            &BTreeMap::new(),
            &QueryParams::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
    }

    #[test]
    fn test_headers_for_json_body() {
        let headers = build_headers(
            &[("X-Client".into(), "cli".into())],
            &[("X-Client".into(), "override".into())],
            Some("tok"),
            &RequestBody::Json(json!({})),
        )
        .unwrap();
        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Bearer tok");
        assert_eq!(headers["x-client"], "override");
    }

    #[test]
    fn test_headers_for_multipart_body() {
        let form = FormData::new().file("image", FilePart::new("a.png", "image/png", vec![1]));
        let headers = build_headers(
            &[("Content-Type".into(), "text/plain".into())],
            &[],
            Some(""),
            &RequestBody::Multipart(form),
        )
        .unwrap();
        assert!(headers.get(CONTENT_TYPE).is_none());
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_parse_body_by_content_type() {
        let json = RawResponse::json(200, &json!({"a": 1}));
        assert_eq!(parse_body(&json), json!({"a": 1}));

        let text = RawResponse::new(200, Some("text/plain; charset=utf-8"), "pong");
        assert_eq!(parse_body(&text), json!("pong"));

        let empty = RawResponse::new(204, None, Vec::new());
        assert_eq!(parse_body(&empty), Value::Null);
    }

    #[test]
    fn test_map_response_declared_message() {
        let url = Url::parse("http://localhost:3001/api/languages/1").unwrap();
        let err = map_response(
            &endpoints::LANGUAGES_GET,
            &url,
            RawResponse::json(404, &json!({"message": "nope"})),
        )
        .unwrap_err();
        match err {
            ApiError::Status {
                status,
                message,
                body,
                method,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Language not found");
                assert_eq!(body, json!({"message": "nope"}));
                assert_eq!(method, "GET");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_response_default_and_generic_messages() {
        let url = Url::parse("http://localhost:3001/api/languages").unwrap();
        let err = map_response(
            &endpoints::LANGUAGES_LIST,
            &url,
            RawResponse::json(401, &json!({})),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized");

        let err = map_response(
            &endpoints::LANGUAGES_LIST,
            &url,
            RawResponse::new(418, Some("text/plain"), "teapot"),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Generic Error: status: 418; status text: I'm a teapot; body: teapot"
        );
    }

    #[test]
    fn test_map_response_success() {
        let url = Url::parse("http://localhost:3001/api/languages").unwrap();
        let value = map_response(
            &endpoints::LANGUAGES_CREATE,
            &url,
            RawResponse::json(201, &json!({"successmessage": "ok"})),
        )
        .unwrap();
        assert_eq!(value, json!({"successmessage": "ok"}));
    }
}
