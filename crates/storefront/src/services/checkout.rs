//! Checkout session orchestration.
//!
//! The local catalog and the provider's catalog are reconciled by product
//! name: each cart item is matched against provider products with the same
//! name, and every price attached to a matched product becomes a line item.
//! Products missing on the provider side are silently skipped.

use crate::models::CartItem;
use crate::payments::{
    CheckoutSession, CreateSessionRequest, LineItem, PaymentProvider, PaymentsError,
    ProviderPrice, ProviderProduct,
};

/// Resolve cart items to provider line items by exact name match.
///
/// Each line item gets quantity 1; a cart holding the same product twice
/// yields two separate line items.
#[must_use]
pub fn resolve_line_items(
    cart: &[CartItem],
    products: &[ProviderProduct],
    prices: &[ProviderPrice],
) -> Vec<LineItem> {
    let mut line_items = Vec::new();

    for item in cart {
        for product in products {
            if product.name != item.name {
                continue;
            }
            for price in prices {
                if price.product_id == product.id {
                    line_items.push(LineItem {
                        price: price.id.clone(),
                        quantity: 1,
                    });
                }
            }
        }
    }

    line_items
}

/// Create a hosted checkout session for the given cart.
///
/// Fetches the provider catalog fresh on every call, resolves line items,
/// and creates the session. The buyer should be redirected to the returned
/// session's `url` with a 303.
///
/// # Errors
///
/// Returns `PaymentsError` if any provider call fails, including the case
/// where no cart item could be resolved and the provider rejects the empty
/// session.
pub async fn create_session<P: PaymentProvider>(
    provider: &P,
    cart: &[CartItem],
    base_url: &str,
) -> Result<CheckoutSession, PaymentsError> {
    let products = provider.list_products().await?;
    let prices = provider.list_prices().await?;

    let line_items = resolve_line_items(cart, &products, &prices);

    let base = base_url.trim_end_matches('/');
    let request = CreateSessionRequest {
        line_items,
        // Literal {CHECKOUT_SESSION_ID} placeholder; the provider substitutes
        // the real session id on redirect.
        success_url: format!("{base}/success?session_id={{CHECKOUT_SESSION_ID}}"),
        cancel_url: format!("{base}/"),
    };

    provider.create_checkout_session(&request).await
}
