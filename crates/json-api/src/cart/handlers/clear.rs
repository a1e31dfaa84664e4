//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    cart::{
        errors::into_status_error,
        responses::{CartChangeResponse, render_change},
    },
    extensions::*,
    state::State,
};

/// Clear Cart Handler
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart emptied"),
    ),
)]
#[tracing::instrument(
    name = "cart.clear",
    skip(depot, res),
    fields(session_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartChangeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    tracing::Span::current().record("session_uuid", tracing::field::display(session));

    let mutation = state
        .app
        .carts
        .clear_cart(session)
        .await
        .map_err(into_status_error)?;

    Ok(render_change(mutation, res))
}
