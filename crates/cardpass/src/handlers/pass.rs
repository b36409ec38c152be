use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use cardpass_core::pass;

use crate::state::AppState;

/// Download filename for the pass archive.
const PASS_FILE_NAME: &str = "alon-gonda-card.pkpass";

/// GET /api/wallet/pass - the card as an unsigned `.pkpass` archive.
///
/// The archive carries an empty `signature` entry; Apple Wallet will warn
/// on import until the manifest is signed with an issuer certificate.
#[axum::debug_handler]
pub async fn download_pass(State(state): State<AppState>) -> Response {
    let archive = match pass::build_archive(&state.pass) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "Failed to generate wallet pass");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to generate wallet pass" })),
            )
                .into_response();
        }
    };

    tracing::debug!(bytes = archive.len(), "Generated wallet pass");

    (
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.apple.pkpass".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PASS_FILE_NAME}\""),
            ),
            (header::CONTENT_LENGTH, archive.len().to_string()),
        ],
        archive,
    )
        .into_response()
}
