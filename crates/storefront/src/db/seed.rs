//! Catalog seeding.
//!
//! The product catalog is a fixed literal list inserted into an empty table
//! at process start (and via `curio-cli seed`). Re-running against a
//! non-empty table is a no-op.

use sqlx::SqlitePool;

use super::RepositoryError;
use super::products::ProductRepository;

/// Seed record: (name, size, price, image).
type SeedProduct = (&'static str, Option<&'static str>, &'static str, &'static str);

/// The fixed catalog. Prices keep the legacy thousands-separated form.
const SEED_PRODUCTS: &[SeedProduct] = &[
    (
        "Golden Grey Buddha",
        Some("12 in"),
        "1,320",
        "https://images.curioandclay.shop/golden-grey-buddha.jpg",
    ),
    (
        "Terracotta Warrior",
        Some("9 in"),
        "1,016",
        "https://images.curioandclay.shop/terracotta-warrior.jpg",
    ),
    (
        "Brass Ganesha",
        Some("7 in"),
        "850",
        "https://images.curioandclay.shop/brass-ganesha.jpg",
    ),
    (
        "Marble Elephant Pair",
        Some("5 in"),
        "2,450",
        "https://images.curioandclay.shop/marble-elephant-pair.jpg",
    ),
    (
        "Ceramic Lotus Bowl",
        None,
        "640",
        "https://images.curioandclay.shop/ceramic-lotus-bowl.jpg",
    ),
];

/// Insert the fixed catalog if the products table is empty.
///
/// Returns the number of products inserted (0 when already seeded).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any query fails.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<usize, RepositoryError> {
    let repo = ProductRepository::new(pool);

    if repo.count().await? > 0 {
        tracing::debug!("catalog already seeded, skipping");
        return Ok(0);
    }

    for (name, size, price, image) in SEED_PRODUCTS {
        repo.insert(name, *size, price, image).await?;
    }

    tracing::info!(products = SEED_PRODUCTS.len(), "catalog seeded");
    Ok(SEED_PRODUCTS.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn test_seed_empty_catalog(pool: SqlitePool) {
        let inserted = seed_catalog(&pool).await.unwrap();
        assert_eq!(inserted, SEED_PRODUCTS.len());

        let products = ProductRepository::new(&pool).list().await.unwrap();
        assert_eq!(products.len(), SEED_PRODUCTS.len());
        assert!(
            products
                .iter()
                .any(|p| p.name == "Golden Grey Buddha" && p.price == "1,320")
        );
    }

    #[sqlx::test]
    async fn test_seed_is_idempotent(pool: SqlitePool) {
        seed_catalog(&pool).await.unwrap();
        let second = seed_catalog(&pool).await.unwrap();
        assert_eq!(second, 0);

        let count = ProductRepository::new(&pool).count().await.unwrap();
        assert_eq!(usize::try_from(count).unwrap(), SEED_PRODUCTS.len());
    }
}
