//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use curio_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        Ok(User {
            id: UserId::new(self.id),
            email,
            name: self.name,
            created_at: self.created_at,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, created_at FROM users WHERE id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Get a user by their email address.
    ///
    /// The match is exact and case-sensitive (SQLite BINARY collation).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, created_at FROM users WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Create a new user with email, display name, and password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        name: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        // Explicit duplicate check so registration can distinguish the
        // duplicate-email case; the UNIQUE constraint is the backstop for
        // racing inserts.
        if self.get_by_email(email).await?.is_some() {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, name, password_hash, created_at) VALUES (?, ?, ?, ?) \
             RETURNING id, email, name, created_at",
        )
        .bind(email.as_str())
        .bind(name)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.into_user()
    }

    /// Get a user and their password hash by email.
    ///
    /// Returns `None` if no user has that email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct UserWithHashRow {
            id: i64,
            email: String,
            name: String,
            created_at: DateTime<Utc>,
            password_hash: String,
        }

        let row = sqlx::query_as::<_, UserWithHashRow>(
            "SELECT id, email, name, created_at, password_hash FROM users WHERE email = ?",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let email = Email::parse(&r.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        let user = User {
            id: UserId::new(r.id),
            email,
            name: r.name,
            created_at: r.created_at,
        };

        Ok(Some((user, r.password_hash)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[sqlx::test]
    async fn test_create_and_lookup(pool: SqlitePool) {
        let repo = UserRepository::new(&pool);

        let user = repo
            .create(&email("maya@example.com"), "Maya", "phc-hash")
            .await
            .unwrap();

        let by_email = repo
            .get_by_email(&email("maya@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, user.id);
        assert_eq!(by_email.name, "Maya");

        let by_id = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email.as_str(), "maya@example.com");
    }

    #[sqlx::test]
    async fn test_duplicate_email_is_conflict(pool: SqlitePool) {
        let repo = UserRepository::new(&pool);

        let first = repo
            .create(&email("dup@example.com"), "First", "hash-1")
            .await
            .unwrap();

        let second = repo
            .create(&email("dup@example.com"), "Second", "hash-2")
            .await;
        assert!(matches!(second, Err(RepositoryError::Conflict(_))));

        // First account unaffected
        let still_there = repo
            .get_by_email(&email("dup@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(still_there.id, first.id);
        assert_eq!(still_there.name, "First");
    }

    #[sqlx::test]
    async fn test_email_match_is_case_sensitive(pool: SqlitePool) {
        let repo = UserRepository::new(&pool);

        repo.create(&email("Case@example.com"), "Case", "hash")
            .await
            .unwrap();

        // Different casing registers as a separate account.
        assert!(
            repo.get_by_email(&email("case@example.com"))
                .await
                .unwrap()
                .is_none()
        );
        repo.create(&email("case@example.com"), "Other", "hash")
            .await
            .unwrap();
    }

    #[sqlx::test]
    async fn test_password_hash_roundtrip(pool: SqlitePool) {
        let repo = UserRepository::new(&pool);

        repo.create(&email("p@example.com"), "P", "the-hash")
            .await
            .unwrap();

        let (user, hash) = repo
            .get_password_hash(&email("p@example.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.email.as_str(), "p@example.com");
        assert_eq!(hash, "the-hash");

        assert!(
            repo.get_password_hash(&email("nobody@example.com"))
                .await
                .unwrap()
                .is_none()
        );
    }
}
