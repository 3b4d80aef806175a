//! Cart repository for per-user cart rows.
//!
//! Rows are denormalized snapshots of products (see `models::cart`); this
//! module never joins back to `products` when reading.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use curio_core::{CartItemId, UserId};

use super::RepositoryError;
use crate::models::{CartItem, Product};

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: i64,
    user_id: i64,
    name: String,
    size: Option<String>,
    price: String,
    image: String,
    created_at: DateTime<Utc>,
}

impl From<CartItemRow> for CartItem {
    fn from(row: CartItemRow) -> Self {
        Self {
            id: CartItemId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            size: row.size,
            price: row.price,
            image: row.image,
            created_at: row.created_at,
        }
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List a user's cart rows, ordered by row id (insertion order).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            "SELECT id, user_id, name, size, price, image, created_at \
             FROM cart_items WHERE user_id = ? ORDER BY id ASC",
        )
        .bind(user_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CartItem::from).collect())
    }

    /// Add a snapshot of `product` to a user's cart.
    ///
    /// No dedup: adding the same product twice yields two rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(
        &self,
        user_id: UserId,
        product: &Product,
    ) -> Result<CartItem, RepositoryError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            "INSERT INTO cart_items (user_id, name, size, price, image, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, user_id, name, size, price, image, created_at",
        )
        .bind(user_id.as_i64())
        .bind(&product.name)
        .bind(product.size.as_deref())
        .bind(&product.price)
        .bind(&product.image)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        Ok(CartItem::from(row))
    }

    /// Delete a cart row by its id.
    ///
    /// No ownership check: the row is deleted whoever owns it. This is a
    /// latent authorization gap carried over from the original system (see
    /// DESIGN.md); callers are still gated on *being* authenticated.
    ///
    /// Returns `true` if a row was deleted, `false` if it was already gone
    /// (racing deletes are silently idempotent).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove_by_id(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every cart row owned by `user_id` whose snapshot name equals
    /// `name` (the product's *current* name, so later catalog renames change
    /// which rows match).
    ///
    /// Returns the number of rows deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn remove_by_name(
        &self,
        user_id: UserId,
        name: &str,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND name = ?")
            .bind(user_id.as_i64())
            .bind(name)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Whether the user's cart contains a row with this snapshot name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn contains_name(
        &self,
        user_id: UserId,
        name: &str,
    ) -> Result<bool, RepositoryError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM cart_items WHERE user_id = ? AND name = ?",
        )
        .bind(user_id.as_i64())
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(count.0 > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::products::ProductRepository;
    use crate::db::users::UserRepository;
    use curio_core::Email;

    async fn test_user(pool: &SqlitePool, addr: &str) -> UserId {
        UserRepository::new(pool)
            .create(&Email::parse(addr).unwrap(), "Test", "hash")
            .await
            .unwrap()
            .id
    }

    async fn test_product(pool: &SqlitePool, name: &str, price: &str) -> Product {
        ProductRepository::new(pool)
            .insert(name, Some("12 in"), price, "https://x/img.jpg")
            .await
            .unwrap()
    }

    #[sqlx::test]
    async fn test_add_snapshots_product_fields(pool: SqlitePool) {
        let user = test_user(&pool, "a@example.com").await;
        let product = test_product(&pool, "Golden Grey Buddha", "1,320").await;
        let cart = CartRepository::new(&pool);

        cart.add(user, &product).await.unwrap();

        let items = cart.list(user).await.unwrap();
        assert_eq!(items.len(), 1);
        let item = items.first().unwrap();
        assert_eq!(item.name, "Golden Grey Buddha");
        assert_eq!(item.size.as_deref(), Some("12 in"));
        assert_eq!(item.price, "1,320");
        assert_eq!(item.image, "https://x/img.jpg");
    }

    #[sqlx::test]
    async fn test_snapshot_survives_product_mutation(pool: SqlitePool) {
        let user = test_user(&pool, "a@example.com").await;
        let product = test_product(&pool, "Golden Grey Buddha", "1,320").await;
        let cart = CartRepository::new(&pool);
        cart.add(user, &product).await.unwrap();

        // Mutate the source product behind the repository's back.
        sqlx::query("UPDATE products SET price = '9,999', name = 'Renamed' WHERE id = ?")
            .bind(product.id.as_i64())
            .execute(&pool)
            .await
            .unwrap();

        let items = cart.list(user).await.unwrap();
        let item = items.first().unwrap();
        assert_eq!(item.name, "Golden Grey Buddha");
        assert_eq!(item.price, "1,320");
    }

    #[sqlx::test]
    async fn test_no_dedup_on_double_add(pool: SqlitePool) {
        let user = test_user(&pool, "a@example.com").await;
        let product = test_product(&pool, "Brass Ganesha", "850").await;
        let cart = CartRepository::new(&pool);

        cart.add(user, &product).await.unwrap();
        cart.add(user, &product).await.unwrap();

        assert_eq!(cart.list(user).await.unwrap().len(), 2);
    }

    #[sqlx::test]
    async fn test_remove_by_id_ignores_owner(pool: SqlitePool) {
        let alice = test_user(&pool, "alice@example.com").await;
        let bob = test_user(&pool, "bob@example.com").await;
        let product = test_product(&pool, "Ceramic Lotus Bowl", "640").await;
        let cart = CartRepository::new(&pool);

        let alices_row = cart.add(alice, &product).await.unwrap();

        // Bob's session can delete Alice's row by id; preserved gap.
        let _ = bob;
        assert!(cart.remove_by_id(alices_row.id).await.unwrap());
        assert!(cart.list(alice).await.unwrap().is_empty());

        // Second delete of the same row is silently a no-op.
        assert!(!cart.remove_by_id(alices_row.id).await.unwrap());
    }

    #[sqlx::test]
    async fn test_remove_by_name_scoped_to_user(pool: SqlitePool) {
        let alice = test_user(&pool, "alice@example.com").await;
        let bob = test_user(&pool, "bob@example.com").await;
        let buddha = test_product(&pool, "Golden Grey Buddha", "1,320").await;
        let warrior = test_product(&pool, "Terracotta Warrior", "1,016").await;
        let cart = CartRepository::new(&pool);

        cart.add(alice, &buddha).await.unwrap();
        cart.add(alice, &buddha).await.unwrap();
        cart.add(alice, &warrior).await.unwrap();
        cart.add(bob, &buddha).await.unwrap();

        let deleted = cart
            .remove_by_name(alice, "Golden Grey Buddha")
            .await
            .unwrap();
        assert_eq!(deleted, 2);

        let alices = cart.list(alice).await.unwrap();
        assert_eq!(alices.len(), 1);
        assert_eq!(alices.first().unwrap().name, "Terracotta Warrior");

        // Bob's identical item untouched.
        assert_eq!(cart.list(bob).await.unwrap().len(), 1);
    }

    #[sqlx::test]
    async fn test_contains_name(pool: SqlitePool) {
        let user = test_user(&pool, "a@example.com").await;
        let product = test_product(&pool, "Marble Elephant Pair", "2,450").await;
        let cart = CartRepository::new(&pool);

        assert!(!cart.contains_name(user, "Marble Elephant Pair").await.unwrap());
        cart.add(user, &product).await.unwrap();
        assert!(cart.contains_name(user, "Marble Elephant Pair").await.unwrap());
    }

    #[sqlx::test]
    async fn test_list_is_insertion_ordered(pool: SqlitePool) {
        let user = test_user(&pool, "a@example.com").await;
        let first = test_product(&pool, "First", "1").await;
        let second = test_product(&pool, "Second", "2").await;
        let cart = CartRepository::new(&pool);

        cart.add(user, &first).await.unwrap();
        cart.add(user, &second).await.unwrap();

        let names: Vec<_> = cart
            .list(user)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
