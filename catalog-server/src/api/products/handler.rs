//! Product API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;

use crate::api::{json_body, path_param, query_params};
use crate::core::ServerState;
use crate::paging::{self, DEFAULT_PAGE_SIZE, DEFAULT_TOP_LIMIT, PageRequest, assembler};
use crate::services::catalog_service;
use crate::utils::AppResult;
use shared::PaginatedResponse;
use shared::models::{ProductCreate, ProductResponse};

type ProductPage = Json<PaginatedResponse<ProductResponse>>;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    page: u32,
    #[serde(default = "default_page_size")]
    size: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedParams {
    #[serde(default)]
    page: u32,
    #[serde(default = "default_page_size")]
    size: i64,
    #[serde(default = "default_sort_field")]
    sort_field: String,
    #[serde(default = "default_direction")]
    direction: String,
}

#[derive(Debug, Deserialize)]
pub struct TopParams {
    #[serde(default = "default_top_limit")]
    limit: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_field() -> String {
    "name".to_string()
}

fn default_direction() -> String {
    "asc".to_string()
}

fn default_top_limit() -> i64 {
    DEFAULT_TOP_LIMIT
}

/// Every `sort` value, in query-string order
fn sort_tokens(pairs: Vec<(String, String)>) -> Vec<String> {
    pairs
        .into_iter()
        .filter(|(key, _)| key == "sort")
        .map(|(_, value)| value)
        .collect()
}

async fn page_of(state: &ServerState, request: PageRequest) -> AppResult<ProductPage> {
    let page = paging::fetch(&state.pool, &request).await?;
    Ok(Json(assembler::assemble(page)))
}

/// GET /api/products - 分页列表
pub async fn list(
    State(state): State<ServerState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<ProductPage> {
    let params = query_params(params)?;
    page_of(&state, PageRequest::basic(params.page, params.size)).await
}

/// GET /api/products/sorted - 单字段排序
pub async fn list_sorted(
    State(state): State<ServerState>,
    params: Result<Query<SortedParams>, QueryRejection>,
) -> AppResult<ProductPage> {
    let params = query_params(params)?;
    let request =
        PageRequest::single_sort(params.page, params.size, &params.sort_field, &params.direction);
    page_of(&state, request).await
}

/// GET /api/products/multi-sort - 多字段排序
pub async fn list_multi_sort(
    State(state): State<ServerState>,
    params: Result<Query<PageParams>, QueryRejection>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<ProductPage> {
    let params = query_params(params)?;
    let tokens = sort_tokens(query_params(pairs)?);
    page_of(&state, PageRequest::multi_sort(params.page, params.size, &tokens)).await
}

/// GET /api/products/query-sort - 通用分页排序
pub async fn list_pageable(
    State(state): State<ServerState>,
    params: Result<Query<PageParams>, QueryRejection>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<ProductPage> {
    let params = query_params(params)?;
    let tokens = sort_tokens(query_params(pairs)?);
    page_of(&state, PageRequest::pageable(params.page, params.size, &tokens)).await
}

/// GET /api/products/by-category/{categoryId} - 按分类分页
pub async fn list_by_category(
    State(state): State<ServerState>,
    category_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<ProductPage> {
    let category_id = path_param(category_id)?;
    let params = query_params(params)?;
    page_of(
        &state,
        PageRequest::by_category(category_id, params.page, params.size),
    )
    .await
}

/// GET /api/products/top-priced - 价格最高的商品
pub async fn top_priced(
    State(state): State<ServerState>,
    params: Result<Query<TopParams>, QueryRejection>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let params = query_params(params)?;
    let page = paging::fetch(&state.pool, &PageRequest::top_n(params.limit)).await?;
    Ok(Json(assembler::to_response_list(page.into_content())))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let payload = json_body(payload)?;
    let product = catalog_service::create_product(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_tokens_keep_order() {
        let pairs = vec![
            ("page".to_string(), "1".to_string()),
            ("sort".to_string(), "name,asc".to_string()),
            ("size".to_string(), "5".to_string()),
            ("sort".to_string(), "price,desc".to_string()),
        ];
        assert_eq!(sort_tokens(pairs), vec!["name,asc", "price,desc"]);
    }
}
