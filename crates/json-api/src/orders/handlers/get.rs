//! Session Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use gearlock_app::domain::orders::records::OrderUuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderResponse},
    state::State,
};

/// Session Order Handler
///
/// Returns an order placed from the current session. Orders of other sessions answer 404.
#[endpoint(
    tags("orders"),
    summary = "Get My Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
#[tracing::instrument(
    name = "orders.get",
    skip(order, depot),
    fields(
        session_uuid = tracing::field::Empty,
        order_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;
    let order = OrderUuid::from_uuid(order.into_inner());

    let span = tracing::Span::current();

    span.record("session_uuid", tracing::field::display(session));
    span.record("order_uuid", tracing::field::display(order));

    let order = state
        .app
        .orders
        .get_session_order(session, order)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
