//! Orders service errors.

use gearlock::orders::{MaterializeError, ValidationErrors};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("invalid buyer details")]
    Validation(#[from] ValidationErrors),

    #[error("not enough stock left for \"{product_name}\"")]
    OutOfStock { product_name: String },

    #[error("ordered product no longer exists")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<MaterializeError> for OrdersServiceError {
    fn from(error: MaterializeError) -> Self {
        match error {
            MaterializeError::EmptyCart => Self::EmptyCart,
        }
    }
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
