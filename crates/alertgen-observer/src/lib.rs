//! Read-only HTTP query API over the generated alert dataset.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - `GET /api/alerts` -- the whole store as a JSON object keyed by alert ID
//! - `GET /api/alerts/{id}` -- one alert, or a 404 not-found payload
//!
//! # Architecture
//!
//! The server reads the [`AlertStore`](alertgen_core::AlertStore) through
//! an `Arc` held in [`AppState`]. The store is fully generated before the
//! server starts and never changes afterwards, so requests are served
//! without locks. [`spawn_observer`] runs the server on a background task
//! next to the engine's export step.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use error::ObserverError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError};
pub use startup::{RunningObserver, StartupError, spawn_observer};
pub use state::AppState;
