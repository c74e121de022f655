//! Shared application state for the alert query API.
//!
//! [`AppState`] hands every handler a read-only view of the generated
//! [`AlertStore`]. The store is complete before the server starts and is
//! never written afterwards, so it is shared through a plain [`Arc`] with
//! no lock around it.

use std::sync::Arc;

use alertgen_core::AlertStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The generated alerts.
    pub store: Arc<AlertStore>,
}

impl AppState {
    /// Create application state over an already populated store.
    pub const fn new(store: Arc<AlertStore>) -> Self {
        Self { store }
    }
}
