//! Staff service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::staff::token::StaffTokenError;

#[derive(Debug, Error)]
pub enum StaffServiceError {
    /// No staff member holds the presented token.
    #[error("staff member not found")]
    NotFound,

    #[error("staff member name is required")]
    MissingName,

    #[error("invalid staff token")]
    Token(#[from] StaffTokenError),

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for StaffServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
