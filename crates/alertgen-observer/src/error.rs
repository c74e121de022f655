//! Error types for the alert query API.
//!
//! [`ObserverError`] is converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! not-found body keeps the `erro` key and Portuguese message that API
//! consumers already match on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Body message for unknown alert IDs.
pub const NOT_FOUND_MESSAGE: &str = "Alerta não encontrado";

/// Errors that can occur in the query API layer.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// No alert exists under the requested ID.
    #[error("alert not found: {0}")]
    NotFound(String),
}

impl IntoResponse for ObserverError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(id) => {
                tracing::debug!(%id, "alert lookup missed");
                let body = serde_json::json!({ "erro": NOT_FOUND_MESSAGE });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
        }
    }
}
