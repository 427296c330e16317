//! HTTP routes for the mock catalog backend

pub mod components;
pub mod health;
pub mod specs;

use crate::state::AppState;
use axum::Router;
use axum::http::Uri;
use axum::routing::{get, post};
use shared::error::AppError;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/components",
            get(components::list).post(components::create),
        )
        .route("/api/components/fetch-specs", post(specs::fetch_specs))
        .route(
            "/api/components/{id}",
            get(components::get)
                .patch(components::update)
                .delete(components::delete),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
