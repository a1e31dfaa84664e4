//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gearlock::cart::QuantityMode;
use gearlock_app::domain::products::records::ProductUuid;

use crate::{
    cart::{
        errors::into_status_error,
        responses::{CartChangeResponse, render_change},
    },
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity for the line
    pub quantity: u32,
}

/// Update Cart Item Handler
///
/// Sets the quantity of a product in the cart, creating the line if needed.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (
            status_code = StatusCode::BAD_REQUEST,
            description = "Not enough stock or invalid quantity"
        ),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "cart.update",
    skip(product, json, depot, res),
    fields(
        session_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartChangeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;
    let product = ProductUuid::from_uuid(product.into_inner());
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    span.record("session_uuid", tracing::field::display(session));
    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", quantity);

    let mutation = state
        .app
        .carts
        .add_item(session, product, quantity, QuantityMode::Replace)
        .await
        .map_err(into_status_error)?;

    Ok(render_change(mutation, res))
}
