//! Product Model

use serde::{Deserialize, Serialize};

/// Product row joined with its owning category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    /// Populated from the category join
    pub category_name: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

/// Product as returned by the API, category flattened to its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub price: f64,
}
