//! Persistent client storage configuration.
//!
//! The dashboard keeps its session (bearer token and cached admin profile) in
//! a small key/value file. Keys are fixed so that sessions written by older
//! builds, which used `authToken`/`user`, are still picked up.
//!
//! # Environment Variables
//!
//! - `LINGUABOARD_SESSION_FILE`: Path of the session file
//!   (default: `<config dir>/linguaboard/session.json`)

use std::env;
use std::path::PathBuf;

/// Fixed storage keys.
pub mod keys {
    pub const AUTH_TOKEN: &str = "authToken";
    pub const USER: &str = "user";
    pub const ACCESS_TOKEN: &str = "admin_access_token";
    pub const REFRESH_TOKEN: &str = "admin_refresh_token";
    pub const USER_DATA: &str = "admin_user_data";
    pub const LANGUAGE_PREFERENCES: &str = "admin_language_prefs";

    /// Keys consulted, in order, when looking for a bearer token.
    pub const TOKEN_LOOKUP: [&str; 2] = [AUTH_TOKEN, ACCESS_TOKEN];

    /// Keys removed when the session is cleared.
    pub const AUTH_DATA: [&str; 5] = [AUTH_TOKEN, USER, ACCESS_TOKEN, REFRESH_TOKEN, USER_DATA];
}

const SESSION_FILE_NAME: &str = "session.json";
const APP_DIR: &str = "linguaboard";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageConfig {
    pub session_file: PathBuf,
}

impl StorageConfig {
    pub fn new(session_file: impl Into<PathBuf>) -> Self {
        Self {
            session_file: session_file.into(),
        }
    }

    pub fn from_env() -> Self {
        let session_file = env::var("LINGUABOARD_SESSION_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        Self { session_file }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_file: default_session_file(),
        }
    }
}

fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(SESSION_FILE_NAME)
}
