//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类接口
//! - [`products`] - 商品接口 (分页、排序、创建)

pub mod categories;
pub mod health;
pub mod products;

use axum::{
    Json, Router,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    middleware,
};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(products::router())
}

/// Router with state and the tower middleware stack applied
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_request))
}

// Extractor rejections become validation errors so every 4xx carries the
// same `{code, message}` body.

pub(crate) fn query_params<T>(result: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    result
        .map(|Query(value)| value)
        .map_err(|e| AppError::validation(e.body_text()))
}

pub(crate) fn path_param<T>(result: Result<Path<T>, PathRejection>) -> AppResult<T> {
    result
        .map(|Path(value)| value)
        .map_err(|e| AppError::validation(e.body_text()))
}

pub(crate) fn json_body<T>(result: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    result
        .map(|Json(value)| value)
        .map_err(|e| AppError::validation(e.body_text()))
}
