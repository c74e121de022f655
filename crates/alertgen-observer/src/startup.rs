//! Background startup helper for embedding the query server in the engine.
//!
//! Provides [`spawn_observer`] which binds the listener on the caller's
//! task and then serves from a background Tokio task, so the dataset
//! export can proceed while requests are answered.
//!
//! # Usage
//!
//! ```rust,ignore
//! use alertgen_observer::{spawn_observer, AppState, ServerConfig};
//! use std::sync::Arc;
//!
//! let config = ServerConfig { host: "127.0.0.1".into(), port: 5000 };
//! let state = Arc::new(AppState::new(Arc::new(store)));
//! let running = spawn_observer(&config, state).await?;
//! // running.local_addr is the bound address; running.handle can be awaited.
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the query server.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// A query server running on a background task.
#[derive(Debug)]
pub struct RunningObserver {
    /// Address the listener is bound to (resolves port `0`).
    pub local_addr: SocketAddr,
    /// The serving task. Completes only if the server fails.
    pub handle: JoinHandle<()>,
}

/// Spawn the query server on a background Tokio task.
///
/// The listener is bound before this function returns, so a port that is
/// already taken surfaces here as [`StartupError::Server`] rather than
/// inside the background task. Serving errors after that point are logged
/// by the task.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the address is invalid or cannot
/// be bound.
pub async fn spawn_observer(
    config: &ServerConfig,
    state: Arc<AppState>,
) -> Result<RunningObserver, StartupError> {
    let listener = crate::server::bind(config).await?;
    let local_addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("listener has no address: {e}")))?;

    let handle = tokio::spawn(async move {
        if let Err(e) = crate::server::serve(listener, state).await {
            tracing::error!(error = %e, "Alert query server exited with error");
        }
    });

    tracing::info!(%local_addr, "Alert query server spawned on background task");

    Ok(RunningObserver { local_addr, handle })
}
