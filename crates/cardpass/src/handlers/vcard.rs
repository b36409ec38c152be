use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use cardpass_core::vcard;

use crate::{error::AppError, state::AppState};

/// GET /api/vcard - the contact card as a downloadable vCard 3.0 file.
///
/// The body is also the exact payload encoded into the card's QR code, so
/// any change to the formatter changes what scanning devices import.
#[axum::debug_handler]
pub async fn download_vcard(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = vcard::generate(&state.card);
    let filename = vcard::vcf_file_name(&state.card);
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))?;

    tracing::debug!(%filename, bytes = body.len(), "Generated vCard");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/vcard; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            ),
        ],
        body,
    )
        .into_response())
}
