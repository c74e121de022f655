//! Axum router construction for the alert query API.
//!
//! Assembles the two read-only routes into a single [`Router`] with CORS
//! enabled so notebooks and dashboards on other origins can read the data.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the query server.
///
/// The router includes:
/// - `GET /api/alerts` -- every alert keyed by ID
/// - `GET /api/alerts/{id}` -- single alert, or 404
///
/// No write routes exist; any other method on these paths is a 405.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/alerts", get(handlers::list_alerts))
        .route("/api/alerts/{id}", get(handlers::get_alert))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
