//! # Linguaboard
//!
//! Admin dashboard for the language-learning platform, delivered as a
//! command line tool on top of a typed API client.
//!
//! ## Overview
//!
//! Operators sign in with an administrator account and manage the
//! platform's content and users from the terminal:
//!
//! - **Parents**: Create, update, (de)activate and delete parent accounts
//! - **Content**: Languages, domains, lessons, words, sentences and
//!   fill-in-the-blank paragraphs
//! - **Statistics**: Platform totals with their monthly trends
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── linguaboard-core/           # ApiError, multipart forms, query params, pagination
//! ├── linguaboard-config/         # ApiConfig and StorageConfig from the environment
//! ├── linguaboard-models/         # Entities, DTOs, envelopes, filters
//! ├── linguaboard-client/         # ApiClient, endpoint table, transport, services
//! └── linguaboard-observability/  # Console logging setup
//! src/
//! ├── cli/                        # clap commands, one module per resource
//! ├── dashboard.rs                # Concurrent overview load
//! ├── output.rs                   # Tables and banners
//! ├── session.rs                  # Persistent session / token provider
//! ├── state.rs                    # Shared client, session and in-flight calls
//! └── validation.rs               # DTO validation before sending
//! ```
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! LINGUABOARD_API_BASE_URL=http://localhost:3001
//! LINGUABOARD_TIMEOUT_SECS=30
//! LINGUABOARD_SESSION_FILE=~/.config/linguaboard/session.json
//! RUST_LOG=linguaboard=debug
//! ```
//!
//! ### Signing In
//!
//! ```bash
//! linguaboard signin --email admin@example.com
//! linguaboard overview
//! linguaboard parents list --status active --search martin
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command definitions and handlers
//! - [`dashboard`]: Overview of statistics and main collections
//! - [`output`]: Terminal rendering
//! - [`session`]: Session file and bearer token lookup
//! - [`state`]: Shared application state
//! - [`validation`]: Request validation utilities

pub mod cli;
pub mod dashboard;
pub mod output;
pub mod session;
pub mod state;
pub mod validation;

// Re-export workspace crates for convenience
pub use linguaboard_client;
pub use linguaboard_config;
pub use linguaboard_core;
pub use linguaboard_models;
