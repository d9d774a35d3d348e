//! Product API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/products | GET | 分页列表 (page, size) |
//! | /api/products | POST | 创建商品 |
//! | /api/products/sorted | GET | 单字段排序 (sortField, direction) |
//! | /api/products/multi-sort | GET | 多字段排序 (sort=field,direction 可重复) |
//! | /api/products/query-sort | GET | 通用分页排序 (sort=field[,field...][,direction]) |
//! | /api/products/by-category/{categoryId} | GET | 按分类分页 |
//! | /api/products/top-priced | GET | 价格最高的 N 个 (limit) |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/sorted", get(handler::list_sorted))
        .route("/multi-sort", get(handler::list_multi_sort))
        .route("/query-sort", get(handler::list_pageable))
        .route("/by-category/{category_id}", get(handler::list_by_category))
        .route("/top-priced", get(handler::top_priced))
}
