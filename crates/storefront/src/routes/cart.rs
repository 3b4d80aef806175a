//! Cart route handlers.
//!
//! Every handler here is gated on an authenticated identity. Cart mutations
//! are plain GET links followed by a redirect, matching the legacy surface.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use serde_json::json;

use curio_core::{CartItemId, ProductId};

use crate::db::{RepositoryError, cart::CartRepository, products::ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{CartItem, cart};
use crate::state::AppState;

/// Cart row display data.
#[derive(Debug, Serialize)]
pub struct CartItemView {
    pub id: i64,
    pub name: String,
    pub size: Option<String>,
    pub price: String,
    pub image: String,
}

impl From<CartItem> for CartItemView {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.as_i64(),
            name: item.name,
            size: item.size,
            price: item.price,
            image: item.image,
        }
    }
}

/// Show the current user's cart with its total.
pub async fn your_cart(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<serde_json::Value>> {
    let items = CartRepository::new(state.pool()).list(user.id).await?;
    let total = cart::total(&items)?;
    let views: Vec<CartItemView> = items.into_iter().map(CartItemView::from).collect();

    Ok(Json(json!({
        "user": user.name,
        "items": views,
        "total": total.to_string(),
    })))
}

/// Snapshot a product into the cart, then bounce back to its detail page.
///
/// No dedup: adding the same product twice yields two rows.
pub async fn add_to_cart(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<Response> {
    let product = get_product(&state, id).await?;
    CartRepository::new(state.pool())
        .add(user.id, &product)
        .await?;

    Ok(Redirect::to(&format!("/show_product/{id}")).into_response())
}

/// Remove every cart row whose snapshot name matches the product's current
/// name, then bounce back to the product page.
pub async fn delete_from_cart(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<Response> {
    let product = get_product(&state, id).await?;
    let removed = CartRepository::new(state.pool())
        .remove_by_name(user.id, &product.name)
        .await?;
    tracing::debug!(user_id = %user.id, product = %product.name, removed, "Removed cart rows");

    Ok(Redirect::to(&format!("/show_product/{id}")).into_response())
}

/// Remove a single cart row by its id, then bounce back to the cart.
///
/// Deletes by row identity only, without checking which user owns the row.
/// That mirrors the legacy surface; see DESIGN.md before tightening it.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<Response> {
    CartRepository::new(state.pool())
        .remove_by_id(CartItemId::new(id))
        .await?;

    Ok(Redirect::to("/your_cart").into_response())
}

async fn get_product(state: &AppState, id: i64) -> Result<crate::models::Product> {
    ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("product {id}")),
            other => AppError::Database(other),
        })
}
