//! HTTP transport.
//!
//! The request layer never talks to the network directly; it hands a
//! [`PreparedRequest`] to a [`Transport`]. [`ReqwestTransport`] is the real
//! implementation. Tests plug in recording stubs.

use async_trait::async_trait;
use linguaboard_config::ApiConfig;
use linguaboard_core::{ApiError, FormData, FormValue};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::request::{PreparedBody, PreparedRequest, RawResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and collects the whole response body.
    ///
    /// Only failures to obtain a response are errors here; HTTP error
    /// statuses are returned as ordinary responses.
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the underlying client from the API configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .cookie_store(config.with_credentials)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::transport)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, ApiError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let builder = self.client.request(method, url).headers(headers);
        let builder = match body {
            PreparedBody::Empty => builder,
            PreparedBody::Json(bytes) => builder.body(bytes),
            PreparedBody::Multipart(form) => builder.multipart(to_multipart(form)?),
        };

        let response = builder.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await.map_err(ApiError::transport)?;

        debug!(http.status = status.as_u16(), http.body_len = body.len(), "Response received");

        Ok(RawResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Encodes a [`FormData`] as a reqwest multipart form, one part per field.
pub fn to_multipart(form: FormData) -> Result<Form, ApiError> {
    form.into_fields()
        .into_iter()
        .try_fold(Form::new(), |multipart, (key, value)| match value {
            FormValue::Text(text) => Ok(multipart.text(key, text)),
            FormValue::File(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(ApiError::transport)?;
                Ok(multipart.part(key, part))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use linguaboard_core::FilePart;
    use std::time::Duration;

    #[test]
    fn test_transport_builds_from_config() {
        let config = ApiConfig::default().with_timeout(Duration::from_secs(5));
        assert!(ReqwestTransport::new(&config).is_ok());
    }

    #[test]
    fn test_to_multipart_accepts_files_and_text() {
        let form = FormData::new()
            .text("name", "Animals")
            .file("image", FilePart::new("cat.png", "image/png", vec![1, 2, 3]))
            .file("image", FilePart::new("dog.png", "image/png", vec![4]));
        let multipart = to_multipart(form).unwrap();
        assert!(multipart.boundary().len() > 10);
    }

    #[test]
    fn test_to_multipart_rejects_bad_mime() {
        let form = FormData::new().file("image", FilePart::new("x", "not a mime", vec![0]));
        assert!(matches!(to_multipart(form), Err(ApiError::Transport(_))));
    }
}
