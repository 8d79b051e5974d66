//! Persistent session storage.
//!
//! The signed-in admin's token and cached profile live in a small JSON
//! key/value file (see [`linguaboard_config::StorageConfig`]). The store is
//! also the client's [`TokenProvider`], so every request picks up the token
//! currently on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use linguaboard_client::TokenProvider;
use linguaboard_config::keys;
use linguaboard_core::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode session value: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    entries: RwLock<Map<String, Value>>,
}

impl SessionStore {
    /// Opens the store at `path`. A missing file is an empty session.
    #[instrument]
    pub async fn open(path: &Path) -> Result<Self, SessionError> {
        let entries = match fs::read(path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Map::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| SessionError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No session file yet");
                Map::new()
            }
            Err(source) => {
                return Err(SessionError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().await.get(key).cloned()
    }

    /// Reads `key` as `T`, ignoring values that do not decode.
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key).await?;
        serde_json::from_value(value)
            .inspect_err(|e| warn!(session.key = %key, error = %e, "Ignoring unreadable session value"))
            .ok()
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let value = serde_json::to_value(value)?;
        self.entries.write().await.insert(key.to_string(), value);
        self.save().await
    }

    pub async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.write().await.remove(key);
        self.save().await
    }

    /// First non-empty token under the known token keys.
    pub async fn token(&self) -> Option<String> {
        let entries = self.entries.read().await;
        keys::TOKEN_LOOKUP
            .iter()
            .filter_map(|key| entries.get(*key).and_then(Value::as_str))
            .find(|token| !token.is_empty())
            .map(str::to_owned)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token().await.is_some()
    }

    /// Stores a fresh sign-in: the token and the user summary.
    #[instrument(skip(self, token, user))]
    pub async fn store_login<U: Serialize + ?Sized>(
        &self,
        token: &str,
        user: &U,
    ) -> Result<(), SessionError> {
        let user = serde_json::to_value(user)?;
        {
            let mut entries = self.entries.write().await;
            entries.insert(keys::AUTH_TOKEN.to_string(), Value::String(token.to_string()));
            entries.insert(keys::USER.to_string(), user);
        }
        self.save().await
    }

    /// Removes every authentication key, keeping preferences.
    #[instrument(skip(self))]
    pub async fn clear_auth(&self) -> Result<(), SessionError> {
        {
            let mut entries = self.entries.write().await;
            for key in keys::AUTH_DATA {
                entries.remove(key);
            }
        }
        self.save().await
    }

    async fn save(&self) -> Result<(), SessionError> {
        let io_error = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let bytes = {
            let entries = self.entries.read().await;
            serde_json::to_vec_pretty(&*entries)?
        };
        fs::write(&self.path, bytes).await.map_err(io_error)?;

        debug!(session.path = %self.path.display(), "Session saved");
        Ok(())
    }
}

#[async_trait]
impl TokenProvider for SessionStore {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(SessionStore::token(self).await)
    }
}
