//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use gearlock_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Your cart is empty"),
        OrdersServiceError::Validation(errors) => {
            StatusError::unprocessable_entity().brief(errors.to_string())
        }
        error @ OrdersServiceError::OutOfStock { .. } => {
            StatusError::conflict().brief(error.to_string())
        }
        OrdersServiceError::InvalidReference => {
            StatusError::conflict().brief("An ordered product no longer exists")
        }
        OrdersServiceError::InvalidData => StatusError::bad_request().brief("Invalid order data"),
        OrdersServiceError::Sql(source) => {
            error!("order storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
