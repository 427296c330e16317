//! Component CRUD
//!
//! Bodies are taken as loose JSON objects: the store validates creates and
//! merges updates key by key.

use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::{Map, Value};
use shared::error::{ApiResponse, AppError};
use shared::models::ComponentListQuery;
use std::sync::Arc;

type ApiResult<T> = Result<Json<T>, AppError>;

/// GET /api/components
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ComponentListQuery>,
) -> Json<Value> {
    Json(state.components.list(&query).await)
}

/// GET /api/components/{id}
pub async fn get(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult<Value> {
    state.components.get(&id).await.map(Json)
}

/// POST /api/components
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let record = state.components.create(body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/components/{id}
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> ApiResult<Value> {
    state.components.update(&id, body).await.map(Json)
}

/// DELETE /api/components/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<()>> {
    state.components.delete(&id).await?;
    Ok(Json(ApiResponse::ok()))
}
