//! Product repository for catalog reads.
//!
//! The catalog is read-only after seeding; the only write path is
//! [`ProductRepository::insert`], used by the seeder.

use sqlx::SqlitePool;

use curio_core::ProductId;

use super::RepositoryError;
use crate::models::Product;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    size: Option<String>,
    price: String,
    image: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            size: row.size,
            price: row.price,
            image: row.image,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, size, price, image FROM products ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has that id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, size, price, image FROM products WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::from).ok_or(RepositoryError::NotFound)
    }

    /// Number of products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Insert a product (seeding only).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        name: &str,
        size: Option<&str>,
        price: &str,
        image: &str,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, size, price, image) VALUES (?, ?, ?, ?) \
             RETURNING id, name, size, price, image",
        )
        .bind(name)
        .bind(size)
        .bind(price)
        .bind(image)
        .fetch_one(self.pool)
        .await?;

        Ok(Product::from(row))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn test_insert_and_get(pool: SqlitePool) {
        let repo = ProductRepository::new(&pool);

        let created = repo
            .insert(
                "Golden Grey Buddha",
                Some("12 in"),
                "1,320",
                "https://images.curioandclay.shop/golden-grey-buddha.jpg",
            )
            .await
            .unwrap();

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Golden Grey Buddha");
        assert_eq!(fetched.price, "1,320");
    }

    #[sqlx::test]
    async fn test_get_missing_is_not_found(pool: SqlitePool) {
        let repo = ProductRepository::new(&pool);
        let result = repo.get(ProductId::new(999)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[sqlx::test]
    async fn test_list_ordered_by_id(pool: SqlitePool) {
        let repo = ProductRepository::new(&pool);
        let a = repo.insert("A", None, "10", "https://x/a.jpg").await.unwrap();
        let b = repo.insert("B", None, "20", "https://x/b.jpg").await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }
}
