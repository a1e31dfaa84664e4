//! Gearlock
//!
//! Storefront domain core: the session cart, its read-time reconciliation against live
//! stock, the materialization of a cart into an order, and catalog listing rules.

pub mod cart;
pub mod catalog;
pub mod notices;
pub mod orders;
pub mod prelude;
pub mod products;
pub mod reviews;
pub mod roles;
pub mod slugs;
