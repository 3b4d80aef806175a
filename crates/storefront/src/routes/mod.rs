//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Catalog listing
//! GET  /show_product/{id}         - Product detail
//!
//! # Auth
//! GET  /register                  - Registration page
//! POST /register                  - Registration action
//! GET  /login                     - Login page
//! POST /login                     - Login action
//! GET  /logout                    - Logout action (requires auth)
//!
//! # Cart (requires auth)
//! GET  /your_cart                 - Cart contents with total
//! GET  /add_to_cart/{id}          - Add product snapshot to cart
//! GET  /delete_from_cart/{id}     - Remove cart rows matching a product's name
//! GET  /remove_from_Cart/{id}     - Remove one cart row by its id
//!
//! # Checkout
//! GET  /checkout-page             - Checkout landing page
//! GET  /payment_checkout_session  - Create provider session, 303 to it (auth)
//! GET  /success                   - Post-payment landing page
//!
//! # Operational
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (pings the database)
//! ```
//!
//! Path spellings (including the capital C in `/remove_from_Cart/{id}`) are
//! part of the public surface consumed by existing clients and must not be
//! normalized.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the storefront router.
///
/// Middleware (sessions, tracing, Sentry) is layered on by the caller.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalog::home))
        .route("/show_product/{id}", get(catalog::show_product))
        .route(
            "/register",
            get(auth::register_page).post(auth::register),
        )
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/your_cart", get(cart::your_cart))
        .route("/add_to_cart/{id}", get(cart::add_to_cart))
        .route("/delete_from_cart/{id}", get(cart::delete_from_cart))
        .route("/remove_from_Cart/{id}", get(cart::remove_from_cart))
        .route("/checkout-page", get(checkout::checkout_page))
        .route(
            "/payment_checkout_session",
            get(checkout::payment_checkout_session),
        )
        .route("/success", get(checkout::success))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        .with_state(state)
}

/// Query parameters carrying a user-facing notice between redirects.
#[derive(Debug, serde::Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}
