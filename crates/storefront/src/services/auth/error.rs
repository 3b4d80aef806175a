//! Authentication error types.

use thiserror::Error;

use curio_core::EmailError;

use crate::db::RepositoryError;

/// Errors from the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email address failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// An account with this email already exists.
    #[error("email already registered")]
    DuplicateEmail,

    /// No account with this email exists.
    #[error("unknown email")]
    UnknownEmail,

    /// The password did not match the stored hash.
    #[error("bad password")]
    BadPassword,

    /// Password hashing or verification machinery failed.
    #[error("password hash error: {0}")]
    Hash(String),

    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
