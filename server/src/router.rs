use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::state::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::form_page).post(handlers::generate))
        .route("/healthz", get(handlers::healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
