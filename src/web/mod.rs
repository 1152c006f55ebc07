pub mod error;
pub mod handlers;
pub mod html;

use crate::core::catalog::Catalog;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state. Cloning only bumps the `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::listing_handler))
        .route("/universities", get(handlers::listing_handler))
        .route("/universities.csv", get(handlers::csv_export_handler))
        .route("/universities/{id}", get(handlers::detail_handler))
        .route("/api/universities", get(handlers::api_list_handler))
        .route("/api/universities/{id}", get(handlers::api_detail_handler))
        .route("/health", get(handlers::health_handler))
        .fallback(handlers::fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
