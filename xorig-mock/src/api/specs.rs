use crate::state::AppState;
use axum::{Json, extract::State};
use shared::error::AppError;
use shared::models::{FetchSpecsRequest, ScrapedSpecs};
use std::sync::Arc;

/// POST /api/components/fetch-specs
pub async fn fetch_specs(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FetchSpecsRequest>,
) -> Result<Json<ScrapedSpecs>, AppError> {
    let specs = state.scrapes.lookup(&req.url).await.inspect_err(|e| {
        tracing::warn!(url = %req.url, error = %e, "Spec scrape failed");
    })?;
    Ok(Json(specs))
}
