//! Session Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrdersResponse},
    state::State,
};

/// Session Orders Handler
///
/// Returns the orders placed from the current session, newest first.
#[endpoint(tags("orders"), summary = "List My Orders")]
#[tracing::instrument(
    name = "orders.index",
    skip(depot),
    fields(session_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    tracing::Span::current().record("session_uuid", tracing::field::display(session));

    let orders = state
        .app
        .orders
        .list_session_orders(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into()))
}
