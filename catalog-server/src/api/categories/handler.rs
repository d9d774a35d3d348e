//! Category API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::json_body;
use crate::core::ServerState;
use crate::services::catalog_service;
use crate::utils::AppResult;
use shared::models::{Category, CategoryCreate};

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = catalog_service::list_categories(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CategoryCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let payload = json_body(payload)?;
    let category = catalog_service::create_category(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
