//! # Linguaboard Core
//!
//! Core types, errors, and utilities for the Linguaboard API client.
//!
//! This crate provides foundational types used throughout the workspace:
//!
//! - [`errors`]: The API error taxonomy surfaced by every request
//! - [`form`]: Multipart form payloads and upload limits
//! - [`pagination`]: Server-side page parameters and client-side pagination
//! - [`query`]: Query string parameters with absent values omitted
//! - [`serde`]: Custom serde serialization/deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use linguaboard_core::errors::ApiError;
//! use linguaboard_core::pagination::{PageParams, paginate};
//!
//! // Inspect a failed call
//! if let Err(ApiError::Status { status, message, .. }) = result {
//!     eprintln!("{status}: {message}");
//! }
//!
//! // Slice an already fetched list
//! let page = paginate(&parents, 0, 10);
//! ```

pub mod errors;
pub mod form;
pub mod pagination;
pub mod query;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{ApiError, ApiResult};
pub use form::{FilePart, FormData, FormValue, UploadError};
pub use pagination::{LocalPage, PageParams, SortOrder, paginate};
pub use query::{QueryParams, QueryValue};
