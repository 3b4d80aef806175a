//! Catalog seeding command.

use curio_storefront::db::seed::seed_catalog;

use super::{CommandError, connect};

/// Seed the product catalog.
///
/// Idempotent: does nothing if the catalog already has products.
///
/// # Errors
///
/// Returns `CommandError` if the database is unreachable or the insert
/// fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Seeding product catalog...");
    let inserted = seed_catalog(&pool).await?;

    if inserted == 0 {
        tracing::info!("Catalog already seeded, nothing to do");
    } else {
        tracing::info!("Seeded {inserted} products");
    }
    Ok(())
}
