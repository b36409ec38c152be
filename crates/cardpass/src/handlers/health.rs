//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (runs both generators)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cardpass_core::{pass, vcard};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe that exercises both generators.
///
/// Runs the vCard formatter and the pass assembly against the configured
/// card. Returns 200 with output sizes when both succeed, 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let vcard_bytes = vcard::generate(&state.card).len();

    match pass::build_archive(&state.pass) {
        Ok(archive) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "ready": true,
                "vcard_bytes": vcard_bytes,
                "pass_bytes": archive.len(),
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "ready": false,
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
