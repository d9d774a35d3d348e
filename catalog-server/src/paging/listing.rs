//! Listing engine
//!
//! Executes a [`PageRequest`] with a single store call and materializes the
//! result as a [`Page`].

use crate::db::repository::{RepoResult, product};
use crate::paging::PageRequest;
use shared::Page;
use shared::models::Product;
use sqlx::SqlitePool;

/// Query interface the listing engine needs from the entity store
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// Rows of the requested page and the total count of matching rows
    async fn fetch_page(&self, request: &PageRequest) -> RepoResult<(Vec<Product>, u64)>;
}

impl ProductStore for SqlitePool {
    async fn fetch_page(&self, request: &PageRequest) -> RepoResult<(Vec<Product>, u64)> {
        product::find_page(self, request).await
    }
}

/// Run one page request against the store
pub async fn fetch<S: ProductStore>(store: &S, request: &PageRequest) -> RepoResult<Page<Product>> {
    let (rows, total) = store.fetch_page(request).await?;

    tracing::debug!(
        page = request.page(),
        size = request.size(),
        rows = rows.len(),
        total,
        "Product page fetched"
    );

    Ok(Page::new(rows, request.page(), request.size(), total))
}
