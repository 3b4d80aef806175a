//! CLI command implementations.

pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::SqlitePool;

/// Errors shared by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] curio_storefront::db::RepositoryError),
}

/// Connect to the storefront database from the environment.
///
/// Reads `CURIO_DATABASE_URL` (falling back to `DATABASE_URL`), the same
/// variables the storefront binary uses.
pub async fn connect() -> Result<SqlitePool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CURIO_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("CURIO_DATABASE_URL"))?;

    tracing::info!("Connecting to storefront database...");
    curio_storefront::db::create_pool(&SecretString::from(database_url))
        .await
        .map_err(CommandError::from)
}
