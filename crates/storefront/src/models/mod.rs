//! Domain models for the storefront.
//!
//! Row types live in the `db` repositories; these are the validated domain
//! types handlers and services work with.

pub mod cart;
pub mod product;
pub mod session;
pub mod user;

pub use cart::CartItem;
pub use product::Product;
pub use session::{CurrentUser, session_keys};
pub use user::User;
