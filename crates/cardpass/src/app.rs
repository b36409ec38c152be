use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        contact::get_contact,
        health::{livez, readyz},
        pass::download_pass,
        vcard::download_vcard,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS for the API: the card is public, read-only data
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route("/vcard", get(download_vcard))
        .route("/contact", get(get_contact))
        .route("/wallet/pass", get(download_pass))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
