//! REST API endpoint handlers for the alert query server.
//!
//! Both handlers read the shared [`AlertStore`](alertgen_core::AlertStore)
//! directly; there is nothing to lock.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/alerts` | All alerts, as an object keyed by alert ID |
//! | `GET` | `/api/alerts/{id}` | A single alert |

use std::sync::Arc;

use alertgen_types::AlertId;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/alerts -- full dump
// ---------------------------------------------------------------------------

/// Return every alert as a JSON object mapping alert ID to record, in
/// generation order. No pagination or filtering.
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> Response {
    Json(state.store.as_ref()).into_response()
}

// ---------------------------------------------------------------------------
// GET /api/alerts/{id} -- single alert
// ---------------------------------------------------------------------------

/// Return one alert by ID.
///
/// Anything that is not the ID of a stored alert, including text that is
/// not a UUID at all, yields a 404 with the not-found payload.
pub async fn get_alert(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Response, ObserverError> {
    let alert = id_str
        .parse::<AlertId>()
        .ok()
        .and_then(|id| state.store.get(&id))
        .ok_or(ObserverError::NotFound(id_str))?;

    Ok(Json(alert).into_response())
}
