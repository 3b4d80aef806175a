//! Application services.
//!
//! Services compose repositories and external clients behind the route
//! handlers.

pub mod auth;
pub mod checkout;
