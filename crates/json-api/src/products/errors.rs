//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use gearlock_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("A product with this slug or SKU already exists")
        }
        ProductsServiceError::InUse => {
            StatusError::conflict().brief("Product is referenced by existing orders")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::CategoryNotFound => {
            StatusError::not_found().brief("Category not found")
        }
        ProductsServiceError::BrandNotFound => StatusError::not_found().brief("Brand not found"),
        ProductsServiceError::PageNotFound => StatusError::not_found().brief("Page not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
