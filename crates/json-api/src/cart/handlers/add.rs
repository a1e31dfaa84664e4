//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
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

fn default_quantity() -> u32 {
    1
}

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub product_uuid: Uuid,

    /// Units to add, 1 when omitted
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Replace the quantity already in the cart instead of adding to it
    #[serde(default, rename = "override")]
    pub override_quantity: bool,
}

/// Add Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (
            status_code = StatusCode::BAD_REQUEST,
            description = "Not enough stock or invalid quantity"
        ),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "cart.add",
    skip(json, depot, res),
    fields(
        session_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartChangeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;
    let request = json.into_inner();
    let product = ProductUuid::from_uuid(request.product_uuid);

    let span = tracing::Span::current();

    span.record("session_uuid", tracing::field::display(session));
    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", request.quantity);

    let mutation = state
        .app
        .carts
        .add_item(
            session,
            product,
            request.quantity,
            QuantityMode::from_override(request.override_quantity),
        )
        .await
        .map_err(into_status_error)?;

    Ok(render_change(mutation, res))
}
