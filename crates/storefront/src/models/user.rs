//! User domain types.

use chrono::{DateTime, Utc};

use curio_core::{Email, UserId};

/// A registered storefront user.
///
/// The password hash never leaves the `db` and `services::auth` layers.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique, matched case-sensitively).
    pub email: Email,
    /// Display name.
    pub name: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}
