//! Create Product Handler

use std::{str::FromStr, sync::Arc};

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use gearlock_app::domain::{
    brands::records::BrandUuid, categories::records::CategoryUuid, products::data::NewProduct,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,

    /// Unit price as a decimal string, e.g. "19.99"
    pub price: String,

    /// Units in stock
    #[serde(default)]
    pub quantity: u32,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Price before a markdown, as a decimal string
    #[serde(default)]
    pub old_price: Option<String>,

    #[serde(default)]
    pub category_uuid: Option<Uuid>,

    #[serde(default)]
    pub brand_uuid: Option<Uuid>,

    /// Hidden from storefront listings when false
    #[serde(default = "listed_by_default")]
    pub is_active: bool,
}

fn listed_by_default() -> bool {
    true
}

/// Parse a non-negative decimal amount named `field`.
pub(crate) fn parse_amount(value: &str, field: &str) -> Result<Decimal, StatusError> {
    let amount = Decimal::from_str(value.trim())
        .or_400(&format!("{field} must be a decimal amount"))?;

    if amount.is_sign_negative() {
        return Err(StatusError::bad_request().brief(format!("{field} cannot be negative")));
    }

    Ok(amount)
}

pub(crate) fn parse_old_price(value: Option<&str>) -> Result<Option<Decimal>, StatusError> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| parse_amount(value, "old_price"))
        .transpose()
}

impl CreateProductRequest {
    fn into_new_product(self) -> Result<NewProduct, StatusError> {
        Ok(NewProduct {
            price: parse_amount(&self.price, "price")?,
            old_price: parse_old_price(self.old_price.as_deref())?,
            name: self.name,
            sku: self.sku.filter(|sku| !sku.trim().is_empty()),
            description: self.description,
            quantity: self.quantity,
            category: self.category_uuid.map(CategoryUuid::from_uuid),
            brand: self.brand_uuid.map(BrandUuid::from_uuid),
            is_active: self.is_active,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Slug or SKU already taken"),
        (status_code = StatusCode::NOT_FOUND, description = "Category or brand not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid staff token"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff role may not edit the catalog"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = json.into_inner().into_new_product()?;

    let product = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    tracing::Span::current().record("product_uuid", tracing::field::display(product.uuid));

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
