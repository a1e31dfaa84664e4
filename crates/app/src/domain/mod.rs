//! Storefront Domain Concerns

pub mod brands;
pub mod carts;
pub mod categories;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod sessions;
pub mod staff;
