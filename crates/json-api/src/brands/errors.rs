//! Brand Errors

use salvo::http::StatusError;
use tracing::error;

use gearlock_app::domain::brands::BrandsServiceError;

pub(crate) fn into_status_error(error: BrandsServiceError) -> StatusError {
    match error {
        BrandsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A brand with this name already exists")
        }
        BrandsServiceError::NotFound => StatusError::not_found().brief("Brand not found"),
        BrandsServiceError::MissingRequiredData | BrandsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid brand payload")
        }
        BrandsServiceError::Sql(source) => {
            error!("brand storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
