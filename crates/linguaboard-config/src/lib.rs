//! # Linguaboard Config
//!
//! Configuration types for the Linguaboard API client and dashboard.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`api`]: Backend base URL, timeout and credentials mode
//! - [`storage`]: Location and keys of the persisted session
//!
//! # Example
//!
//! ```ignore
//! use linguaboard_config::{ApiConfig, StorageConfig};
//!
//! let api_config = ApiConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! api_config.validate()?;
//! ```

pub mod api;
pub mod storage;

// Re-export commonly used types at crate root
pub use api::{ApiConfig, ConfigError};
pub use storage::{StorageConfig, keys};
