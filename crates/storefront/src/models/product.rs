//! Product domain type.

use curio_core::{Price, PriceError, ProductId};

/// A catalog product.
///
/// Products are seeded at process start and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name. Also the key used to match against the payment
    /// provider's catalog at checkout.
    pub name: String,
    /// Optional size descriptor (e.g. "12 in").
    pub size: Option<String>,
    /// Price in the legacy thousands-separated string form (e.g. "1,320").
    pub price: String,
    /// Image URL.
    pub image: String,
}

impl Product {
    /// Parse the stored price string into a [`Price`].
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if the stored string is not numeric after
    /// stripping thousands separators.
    pub fn parsed_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.price)
    }
}
