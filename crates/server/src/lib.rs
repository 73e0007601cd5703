//! HTTP boundary for newscan: `POST /scrape` and `GET /health`.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod handlers;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/scrape", post(handlers::scrape))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
