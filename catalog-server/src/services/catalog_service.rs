//! Catalog Service - category and product writes
//!
//! Each create runs a single guard lookup before the insert; the schema's
//! UNIQUE and FOREIGN KEY constraints back the guards up.

use crate::db::repository::{category, product};
use crate::paging::assembler;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Category, CategoryCreate, ProductCreate, ProductResponse};
use sqlx::SqlitePool;

/// Create a category with a name no other category uses
pub async fn create_category(pool: &SqlitePool, data: CategoryCreate) -> AppResult<Category> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

    if category::find_by_name(pool, &data.name).await?.is_some() {
        return Err(AppError::category_exists(data.name));
    }

    let created = category::create(pool, &data.name).await?;
    tracing::info!(id = created.id, name = %created.name, "Category created");
    Ok(created)
}

/// Create a product under an existing category
pub async fn create_product(pool: &SqlitePool, data: ProductCreate) -> AppResult<ProductResponse> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;

    if category::find_by_id(pool, data.category_id).await?.is_none() {
        return Err(AppError::category_not_found(data.category_id));
    }

    let created = product::create(pool, &data).await?;
    tracing::info!(id = created.id, category_id = created.category_id, "Product created");
    Ok(assembler::to_product_response(created))
}

/// All categories in id order
pub async fn list_categories(pool: &SqlitePool) -> AppResult<Vec<Category>> {
    Ok(category::find_all(pool).await?)
}
