//! Staff

pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod token;

pub use errors::StaffServiceError;
pub use service::*;
