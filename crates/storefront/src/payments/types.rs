//! Wire types for the payment provider API.

use serde::{Deserialize, Serialize};

/// A product as registered with the payment provider.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProviderProduct {
    /// Provider-assigned product id (e.g. `prod_...`).
    pub id: String,
    /// Display name; matched against local cart item names.
    pub name: String,
}

/// A price object attached to a provider product.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProviderPrice {
    /// Provider-assigned price id (e.g. `price_...`).
    pub id: String,
    /// Id of the product this price belongs to.
    #[serde(rename = "product")]
    pub product_id: String,
}

/// One line of a checkout session: a provider price id and a quantity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineItem {
    /// Provider price id.
    pub price: String,
    /// Unit count.
    pub quantity: u32,
}

/// Request to create a hosted checkout session.
#[derive(Debug, Clone)]
pub struct CreateSessionRequest {
    /// Resolved line items; must be non-empty.
    pub line_items: Vec<LineItem>,
    /// Where the provider redirects the buyer after payment.
    pub success_url: String,
    /// Where the provider redirects the buyer on cancel.
    pub cancel_url: String,
}

/// A created checkout session.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Provider-assigned session id (e.g. `cs_...`).
    pub id: String,
    /// Hosted payment page URL the buyer is redirected to.
    pub url: String,
}

/// Paginated list envelope used by the provider's list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Vec<T>,
}
