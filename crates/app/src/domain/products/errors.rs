//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

const CATEGORY_FOREIGN_KEY: &str = "products_category_uuid_fkey";
const BRAND_FOREIGN_KEY: &str = "products_brand_uuid_fkey";

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("product is referenced by orders")]
    InUse,

    #[error("category not found")]
    CategoryNotFound,

    #[error("brand not found")]
    BrandNotFound,

    #[error("page not found")]
    PageNotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => {
                match error.as_database_error().and_then(DatabaseError::constraint) {
                    Some(CATEGORY_FOREIGN_KEY) => Self::CategoryNotFound,
                    Some(BRAND_FOREIGN_KEY) => Self::BrandNotFound,
                    _ => Self::InUse,
                }
            }
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
