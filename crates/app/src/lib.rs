//! Storefront persistence and application services.

pub mod context;
pub mod database;
pub mod domain;
pub mod uuids;
