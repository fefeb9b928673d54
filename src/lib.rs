pub mod api;
pub mod config;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::storage::StorageService;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageService>,
    pub config: AppConfig,
}

pub fn create_app(state: AppState) -> Router {
    // Cross-origin requests are only allowed for the /api subtree, and only
    // from the configured frontend origin. /uploads is served without CORS
    // headers, same as the original resource map.
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origin.clone())
        .allow_methods([Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route(
            "/upload-design",
            post(api::handlers::uploads::upload_design),
        )
        .layer(cors)
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .nest("/api", api_routes)
        .route(
            "/uploads/:filename",
            get(api::handlers::uploads::serve_upload),
        )
        .with_state(state)
}
