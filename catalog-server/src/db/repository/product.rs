//! Product Repository
//!
//! Product rows are always read joined with their category so the category
//! name is available to the response assembler.

use super::{RepoError, RepoResult};
use crate::paging::{PageRequest, SortOrder};
use shared::models::{Product, ProductCreate};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const SELECT_PRODUCT: &str = "SELECT p.id, p.name, p.price, p.category_id, c.name AS category_name \
     FROM products p JOIN categories c ON c.id = p.category_id";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>(&format!("{SELECT_PRODUCT} WHERE p.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: &ProductCreate) -> RepoResult<Product> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO products (name, price, category_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.category_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Product {id} missing after insert")))
}

/// One page of products plus the total number of matching rows.
///
/// Both reads run in the same transaction so the count matches the page.
pub async fn find_page(pool: &SqlitePool, request: &PageRequest) -> RepoResult<(Vec<Product>, u64)> {
    let mut tx = pool.begin().await?;

    let mut query = QueryBuilder::<Sqlite>::new(SELECT_PRODUCT);
    if let Some(category_id) = request.category_id() {
        query.push(" WHERE p.category_id = ").push_bind(category_id);
    }
    push_order_by(&mut query, request.sort());
    query
        .push(" LIMIT ")
        .push_bind(i64::from(request.size()))
        .push(" OFFSET ")
        .push_bind(request.offset());

    let rows = query
        .build_query_as::<Product>()
        .fetch_all(&mut *tx)
        .await?;

    let total: i64 = match request.category_id() {
        Some(category_id) => {
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = ?")
                .bind(category_id)
                .fetch_one(&mut *tx)
                .await?
        }
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM products")
                .fetch_one(&mut *tx)
                .await?
        }
    };

    tx.commit().await?;

    Ok((rows, u64::try_from(total).unwrap_or_default()))
}

fn push_order_by(query: &mut QueryBuilder<'_, Sqlite>, sort: &[SortOrder]) {
    for (i, order) in sort.iter().enumerate() {
        query.push(if i == 0 { " ORDER BY " } else { ", " });
        query.push(sort_column(&order.field));
        query.push(" ");
        query.push(order.direction.as_sql());
    }
}

/// Map an entity property name to its column.
///
/// Names outside the known properties are quoted and passed through, so an
/// unknown property fails in the store instead of being reinterpreted.
fn sort_column(field: &str) -> String {
    match field {
        "id" => "p.id".to_string(),
        "name" => "p.name".to_string(),
        "price" => "p.price".to_string(),
        "category" | "categoryId" | "category_id" => "p.category_id".to_string(),
        "category.id" => "c.id".to_string(),
        "category.name" => "c.name".to_string(),
        other => format!("p.{}", quote_identifier(other)),
    }
}

/// Backtick quoting: SQLite never reads a backticked token as a string literal
fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::category;

    async fn seeded_pool() -> (SqlitePool, i64, i64) {
        let pool = DbService::in_memory().await.unwrap().pool;
        let fruit = category::create(&pool, "Fruit").await.unwrap().id;
        let tools = category::create(&pool, "Tools").await.unwrap().id;

        let rows = [
            ("Banana", 1.5, fruit),
            ("Apple", 2.0, fruit),
            ("Hammer", 12.0, tools),
            ("Apple", 0.5, tools),
            ("Cherry", 4.25, fruit),
        ];
        for (name, price, category_id) in rows {
            create(
                &pool,
                &ProductCreate {
                    name: name.to_string(),
                    price,
                    category_id,
                },
            )
            .await
            .unwrap();
        }
        (pool, fruit, tools)
    }

    fn summary(rows: &[Product]) -> Vec<(&str, f64)> {
        rows.iter().map(|p| (p.name.as_str(), p.price)).collect()
    }

    #[test]
    fn test_sort_column_mapping() {
        assert_eq!(sort_column("price"), "p.price");
        assert_eq!(sort_column("category"), "p.category_id");
        assert_eq!(sort_column("category.name"), "c.name");
        assert_eq!(sort_column("weight"), "p.`weight`");
        assert_eq!(sort_column("x`; DROP TABLE products"), "p.`x``; DROP TABLE products`");
    }

    #[tokio::test]
    async fn test_create_joins_category_name() {
        let (pool, fruit, _) = seeded_pool().await;
        let product = create(
            &pool,
            &ProductCreate {
                name: "Plum".into(),
                price: 3.0,
                category_id: fruit,
            },
        )
        .await
        .unwrap();

        assert_eq!(product.category_id, fruit);
        assert_eq!(product.category_name, "Fruit");
        assert_eq!(find_by_id(&pool, product.id).await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_category() {
        let (pool, _, _) = seeded_pool().await;
        let result = create(
            &pool,
            &ProductCreate {
                name: "Ghost".into(),
                price: 1.0,
                category_id: 4040,
            },
        )
        .await;

        assert!(result.is_err());
        let (_, total) = find_page(&pool, &PageRequest::basic(0, 50)).await.unwrap();
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_find_page_sorted_chain() {
        let (pool, _, _) = seeded_pool().await;
        let request = PageRequest::multi_sort(0, 10, &["name,asc", "price,desc"]);
        let (rows, total) = find_page(&pool, &request).await.unwrap();

        assert_eq!(total, 5);
        assert_eq!(
            summary(&rows),
            vec![
                ("Apple", 2.0),
                ("Apple", 0.5),
                ("Banana", 1.5),
                ("Cherry", 4.25),
                ("Hammer", 12.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_page_limit_offset() {
        let (pool, _, _) = seeded_pool().await;
        let request = PageRequest::single_sort(0, 2, "price", "asc");
        let (rows, _) = find_page(&pool, &request).await.unwrap();
        assert_eq!(summary(&rows), vec![("Apple", 0.5), ("Banana", 1.5)]);

        let request = PageRequest::single_sort(1, 2, "price", "asc");
        let (rows, total) = find_page(&pool, &request).await.unwrap();

        assert_eq!(total, 5);
        assert_eq!(summary(&rows), vec![("Apple", 2.0), ("Cherry", 4.25)]);

        let request = PageRequest::single_sort(5, 2, "price", "asc");
        let (rows, total) = find_page(&pool, &request).await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_find_page_by_category() {
        let (pool, fruit, tools) = seeded_pool().await;

        let (rows, total) = find_page(&pool, &PageRequest::by_category(tools, 0, 10))
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert!(rows.iter().all(|p| p.category_name == "Tools"));

        let (rows, total) = find_page(&pool, &PageRequest::by_category(fruit, 0, 2))
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(rows.len(), 2);

        let (rows, total) = find_page(&pool, &PageRequest::by_category(777, 0, 10))
            .await
            .unwrap();
        assert_eq!(total, 0);
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_find_page_by_joined_category_name() {
        let (pool, _, _) = seeded_pool().await;
        let request = PageRequest::multi_sort(0, 10, &["category.name,desc", "price,asc"]);
        let (rows, _) = find_page(&pool, &request).await.unwrap();

        assert_eq!(
            summary(&rows),
            vec![
                ("Apple", 0.5),
                ("Hammer", 12.0),
                ("Banana", 1.5),
                ("Apple", 2.0),
                ("Cherry", 4.25),
            ]
        );
    }

    #[tokio::test]
    async fn test_find_page_unknown_field_fails() {
        let (pool, _, _) = seeded_pool().await;
        let request = PageRequest::single_sort(0, 10, "weight", "asc");
        let err = find_page(&pool, &request).await.unwrap_err();
        assert!(matches!(err, RepoError::Database(_)), "{err:?}");
    }
}
