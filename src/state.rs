use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, bail};
use linguaboard_client::{ApiCall, ApiClient, CancelHandle, Transport};
use linguaboard_config::{ApiConfig, StorageConfig};
use tracing::{debug, info};

use crate::session::SessionStore;

/// Cancel handles of the calls issued by the running command.
#[derive(Debug, Default)]
pub struct InflightCalls {
    handles: Mutex<Vec<CancelHandle>>,
    interrupts: AtomicUsize,
}

impl InflightCalls {
    pub fn track<T: Send + 'static>(&self, call: ApiCall<T>) -> ApiCall<T> {
        if let Ok(mut handles) = self.handles.lock() {
            handles.push(call.cancel_handle());
        }
        call
    }

    /// Cancels every call that has not settled yet. Returns how many were
    /// actually cancelled.
    pub fn cancel_all(&self) -> usize {
        match self.handles.lock() {
            Ok(handles) => handles.iter().filter(|h| h.cancel()).count(),
            Err(_) => 0,
        }
    }

    /// Handles one Ctrl-C. The first cancels the pending calls and lets the
    /// command unwind; returns `true` when the process should exit instead.
    pub fn interrupt(&self) -> bool {
        let presses = self.interrupts.fetch_add(1, Ordering::SeqCst) + 1;
        let cancelled = self.cancel_all();
        debug!(presses, cancelled, "Interrupted");
        presses > 1 || cancelled == 0
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub client: ApiClient,
    pub session: Arc<SessionStore>,
    pub api_config: ApiConfig,
    pub storage_config: StorageConfig,
    pub inflight: Arc<InflightCalls>,
}

impl AppState {
    /// Registers `call` so that Ctrl-C can cancel it.
    pub fn track<T: Send + 'static>(&self, call: ApiCall<T>) -> ApiCall<T> {
        self.inflight.track(call)
    }

    /// Fails unless a token is stored.
    pub async fn require_auth(&self) -> anyhow::Result<()> {
        if !self.session.is_authenticated().await {
            bail!("Not signed in. Run `linguaboard signin` first.");
        }
        Ok(())
    }
}

/// Builds the state from configuration, using the real HTTP transport
/// unless one is supplied.
pub async fn init_app_state(
    api_config: ApiConfig,
    storage_config: StorageConfig,
    transport: Option<Arc<dyn Transport>>,
) -> anyhow::Result<AppState> {
    api_config
        .validate()
        .context("Invalid API configuration")?;

    let session = Arc::new(
        SessionStore::open(&storage_config.session_file)
            .await
            .context("Failed to open session")?,
    );

    let mut builder = ApiClient::builder(api_config.clone()).token_provider(session.clone());
    if let Some(transport) = transport {
        builder = builder.transport(transport);
    }
    let client = builder.build().context("Failed to build API client")?;

    info!(
        api.base_url = %api_config.base_url,
        session.file = %storage_config.session_file.display(),
        "Client ready"
    );

    Ok(AppState {
        client,
        session,
        api_config,
        storage_config,
        inflight: Arc::new(InflightCalls::default()),
    })
}
