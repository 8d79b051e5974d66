//! # Linguaboard Client
//!
//! Typed HTTP client for the Linguaboard backend.
//!
//! This crate provides:
//!
//! - [`client`]: The explicitly constructed [`ApiClient`] and its token/header providers
//! - [`endpoints`]: One descriptor per backend operation
//! - [`request`]: URL building, header assembly and status mapping
//! - [`transport`]: The [`Transport`] seam and its reqwest implementation
//! - [`cancel`]: Cancelable [`ApiCall`] futures
//! - [`services`]: Typed service namespaces, one per backend area
//!
//! # Example
//!
//! ```ignore
//! use linguaboard_client::{ApiClient, StaticToken};
//! use linguaboard_client::services::AdminLanguageService;
//! use linguaboard_config::ApiConfig;
//!
//! let client = ApiClient::builder(ApiConfig::from_env())
//!     .token_provider(Arc::new(StaticToken::new(token)))
//!     .build()?;
//!
//! let call = AdminLanguageService::create(&client, &dto);
//! let handle = call.cancel_handle();
//! let created = call.await?;
//! ```

pub mod cancel;
pub mod client;
pub mod endpoints;
pub mod request;
pub mod services;
pub mod transport;

// Re-export commonly used types at crate root
pub use cancel::{ApiCall, CallState, CancelHandle};
pub use client::{ApiClient, ApiClientBuilder, HeaderProvider, StaticHeaders, StaticToken, TokenProvider};
pub use endpoints::{Endpoint, MediaType};
pub use request::{PreparedBody, PreparedRequest, RawResponse, RequestBody, RequestParams};
pub use transport::{ReqwestTransport, Transport};
