//! Cart item domain type and totalling.

use chrono::{DateTime, Utc};

use curio_core::{CartItemId, Price, PriceError, UserId};

/// A row in a user's cart.
///
/// Every field except `id` and `user_id` is a snapshot of the product at
/// add time. Later catalog edits must not alter existing rows (historical
/// snapshot semantics), and adding the same product twice yields two rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Unique cart row ID.
    pub id: CartItemId,
    /// Owning user.
    pub user_id: UserId,
    /// Product name at add time.
    pub name: String,
    /// Product size at add time.
    pub size: Option<String>,
    /// Product price at add time, in the legacy string form.
    pub price: String,
    /// Product image URL at add time.
    pub image: String,
    /// When the row was added.
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    /// Parse the snapshotted price string into a [`Price`].
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if the stored string is not numeric after
    /// stripping thousands separators.
    pub fn parsed_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.price)
    }
}

/// Sum the prices of a cart.
///
/// Strips thousands separators and parses each stored price string as an
/// integer before summing.
///
/// # Errors
///
/// Returns [`PriceError`] if any stored price string is non-numeric after
/// stripping separators (surfaced to callers as a malformed-data failure).
pub fn total(items: &[CartItem]) -> Result<Price, PriceError> {
    let mut sum = Price::default();
    for item in items {
        sum = sum
            .checked_add(item.parsed_price()?)
            .ok_or_else(|| PriceError::Malformed(item.price.clone()))?;
    }
    Ok(sum)
}
