//! Review Errors

use salvo::http::StatusError;
use tracing::error;

use gearlock_app::domain::reviews::ReviewsServiceError;

pub(crate) fn into_status_error(error: ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::AlreadyExists => {
            StatusError::conflict().brief("You have already reviewed this product")
        }
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ReviewsServiceError::MissingAuthor => {
            StatusError::bad_request().brief("Author name is required")
        }
        ReviewsServiceError::Invalid(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        ReviewsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid review payload")
        }
        ReviewsServiceError::Sql(source) => {
            error!("review storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
