//! Set Product Stock Handler

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

use gearlock_app::{database::MAX_QUANTITY, domain::products::records::ProductUuid};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Set Stock Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetStockRequest {
    /// Units now in stock
    pub quantity: u32,
}

/// Set Product Stock Handler
#[endpoint(
    tags("products"),
    summary = "Set Product Stock",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stock updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Quantity out of range"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid staff token"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff role may not edit the catalog"),
    ),
)]
#[tracing::instrument(
    name = "products.stock",
    skip(product, json, depot),
    fields(
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<SetStockRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductUuid::from_uuid(product.into_inner());
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", quantity);

    if quantity > MAX_QUANTITY {
        return Err(StatusError::bad_request().brief("quantity is too large"));
    }

    let product = state
        .app
        .products
        .set_quantity(product, quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
