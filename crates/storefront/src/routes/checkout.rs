//! Checkout route handlers.
//!
//! The storefront hands the buyer to the provider's hosted payment page;
//! locally there is only the landing page, the session-creating redirect,
//! and the success page the provider sends the buyer back to.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::db::cart::CartRepository;
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::services::checkout;
use crate::state::AppState;

/// Query parameters on the success callback.
#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    /// Provider session id, substituted into the success URL placeholder.
    pub session_id: Option<String>,
}

/// Checkout landing page.
///
/// Exposes the provider's publishable key for the client-side redirect.
pub async fn checkout_page(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "page": "checkout",
        "public_key": state.config().stripe.public_key,
    }))
}

/// Create a hosted checkout session for the current cart and redirect to it.
///
/// Provider failures surface as a 502; there is no retry.
pub async fn payment_checkout_session(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response> {
    let cart = CartRepository::new(state.pool()).list(user.id).await?;

    let session = checkout::create_session(
        state.payments(),
        &cart,
        state.config().base_url_trimmed(),
    )
    .await?;

    tracing::info!(user_id = %user.id, session_id = %session.id, "Created checkout session");

    Ok(Redirect::to(&session.url).into_response())
}

/// Post-payment landing page.
pub async fn success(Query(query): Query<SuccessQuery>) -> impl IntoResponse {
    Json(json!({
        "page": "success",
        "session_id": query.session_id,
    }))
}
