//! Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use gearlock::orders::BuyerDetails;
use gearlock_app::domain::orders::OrdersServiceError;

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        responses::{OrderResponse, ValidationErrorResponse},
    },
    state::State,
};

/// Checkout Request
///
/// Missing fields are treated as blank and reported back as validation errors.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct CheckoutRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,

    /// One of "card", "cash", "bank"
    pub payment_method: String,

    pub notes: Option<String>,
}

impl From<CheckoutRequest> for BuyerDetails {
    fn from(request: CheckoutRequest) -> Self {
        BuyerDetails {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            city: request.city,
            postal_code: request.postal_code,
            payment_method: request.payment_method,
            notes: request.notes,
        }
    }
}

/// Checkout Handler
///
/// Turns the session's cart into an order and empties the cart.
#[endpoint(
    tags("orders"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed", body = OrderResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::CONFLICT, description = "Not enough stock left"),
        (
            status_code = StatusCode::UNPROCESSABLE_ENTITY,
            description = "Invalid buyer details",
            body = ValidationErrorResponse
        ),
    ),
)]
#[tracing::instrument(
    name = "orders.checkout",
    skip(json, depot, res),
    fields(
        session_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    let span = tracing::Span::current();

    span.record("session_uuid", tracing::field::display(session));

    let placed = state
        .app
        .orders
        .place_order(session, json.into_inner().into())
        .await;

    let order = match placed {
        Ok(order) => order,
        Err(OrdersServiceError::Validation(errors)) => {
            tracing::debug!(fields = errors.fields.len(), "checkout rejected");

            res.status_code(StatusCode::UNPROCESSABLE_ENTITY)
                .render(Json(ValidationErrorResponse::from(errors)));

            return Ok(());
        }
        Err(error) => return Err(into_status_error(error)),
    };

    span.record("order_uuid", tracing::field::display(order.uuid));

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED)
        .render(Json(OrderResponse::from(order)));

    Ok(())
}
