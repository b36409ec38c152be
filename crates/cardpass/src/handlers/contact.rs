use axum::{extract::State, Json};

use crate::{models::ContactResponse, state::AppState};

/// GET /api/contact - the card data as JSON.
///
/// Returns the contact record together with the share links and services
/// blurb, for front ends rendering the card.
#[axum::debug_handler]
pub async fn get_contact(State(state): State<AppState>) -> Json<ContactResponse> {
    Json(ContactResponse::new(
        state.card.as_ref().clone(),
        state.links.as_ref().clone(),
    ))
}
