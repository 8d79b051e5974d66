//! Linguaboard Observability Module
//!
//! Console logging for the CLI. Every API call already runs in an
//! `http.client` span (see `linguaboard-client`); this crate decides what
//! reaches the terminal.
//!
//! # Examples
//!
//! ```no_run
//! use linguaboard_observability::init_basic_console_logging;
//!
//! init_basic_console_logging(0).expect("logging already initialized");
//! ```

pub mod basic_logging;

pub use basic_logging::{DEFAULT_LOG_LEVEL, init_basic_console_logging, level_for_verbosity};
