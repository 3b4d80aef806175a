//! Payment provider integration.
//!
//! The storefront never touches card data. Checkout is delegated to the
//! provider's hosted payment page: we resolve cart items to provider price
//! ids, create a checkout session over the provider's REST API, and redirect
//! the buyer to the session URL.

mod stripe;
mod types;

pub use stripe::StripeClient;
pub use types::{
    CheckoutSession, CreateSessionRequest, LineItem, ProviderPrice, ProviderProduct,
};

use thiserror::Error;

/// Errors from the payment provider integration.
#[derive(Debug, Error)]
pub enum PaymentsError {
    /// Transport-level failure reaching the provider.
    #[error("Payment provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status.
    #[error("Payment provider API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The provider response did not match the expected shape.
    #[error("Failed to parse payment provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A payment provider capable of hosting checkout.
///
/// The production implementation is [`StripeClient`]; tests substitute
/// in-memory stubs.
pub trait PaymentProvider {
    /// Fetch the full product catalog registered with the provider.
    fn list_products(
        &self,
    ) -> impl Future<Output = Result<Vec<ProviderProduct>, PaymentsError>> + Send;

    /// Fetch all prices registered with the provider.
    fn list_prices(&self)
    -> impl Future<Output = Result<Vec<ProviderPrice>, PaymentsError>> + Send;

    /// Create a hosted checkout session and return it.
    fn create_checkout_session(
        &self,
        request: &CreateSessionRequest,
    ) -> impl Future<Output = Result<CheckoutSession, PaymentsError>> + Send;
}
