//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use gearlock_app::domain::products::records::ProductUuid;

use crate::{
    cart::{
        errors::into_status_error,
        responses::{CartChangeResponse, render_change},
    },
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Line removed"),
    ),
)]
#[tracing::instrument(
    name = "cart.remove",
    skip(product, depot, res),
    fields(
        session_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartChangeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;
    let product = ProductUuid::from_uuid(product.into_inner());

    let span = tracing::Span::current();

    span.record("session_uuid", tracing::field::display(session));
    span.record("product_uuid", tracing::field::display(product));

    let mutation = state
        .app
        .carts
        .remove_item(session, product)
        .await
        .map_err(into_status_error)?;

    Ok(render_change(mutation, res))
}
