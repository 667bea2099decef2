use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use receipt_protocol::endpoints;

use crate::config::ServerConfig;
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all receipt endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(endpoints::PROCESS, post(handler::process_receipt))
        .route(endpoints::POINTS, get(handler::get_points))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .fallback(handler::invalid_path)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
