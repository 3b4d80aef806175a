//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::db::{RepositoryError, cart::CartRepository, products::ProductRepository};
use crate::error::{AppError, Result};
use crate::middleware::OptionalAuth;
use crate::models::Product;
use crate::state::AppState;

use super::NoticeQuery;

/// Product display data.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub size: Option<String>,
    pub price: String,
    pub image: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name,
            size: product.size,
            price: product.price,
            image: product.image,
        }
    }
}

/// Catalog listing.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Query(query): Query<NoticeQuery>,
) -> Result<Json<Value>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    let views: Vec<ProductView> = products.into_iter().map(ProductView::from).collect();

    Ok(Json(json!({
        "products": views,
        "user": user.map(|u| u.name),
        "notice": query.notice,
    })))
}

/// Product detail page.
///
/// When somebody is logged in, `in_cart` reports whether their cart already
/// holds a row with this product's name, so the page can swap the add button
/// for a remove button.
pub async fn show_product(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    Path(id): Path<i64>,
) -> Result<Json<Value>> {
    let product = ProductRepository::new(state.pool())
        .get(curio_core::ProductId::new(id))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("product {id}")),
            other => AppError::Database(other),
        })?;

    let in_cart = match &user {
        Some(current) => {
            CartRepository::new(state.pool())
                .contains_name(current.id, &product.name)
                .await?
        }
        None => false,
    };

    Ok(Json(json!({
        "product": ProductView::from(product),
        "in_cart": in_cart,
        "user": user.map(|u| u.name),
    })))
}
