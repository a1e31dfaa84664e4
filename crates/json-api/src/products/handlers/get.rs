//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gearlock_app::domain::products::records::{ProductRecord, ProductUuid};

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    /// URL-safe identifier derived from the name or SKU
    pub slug: String,

    pub sku: Option<String>,

    pub description: String,

    /// Unit price as a decimal string, e.g. "19.99"
    pub price: String,

    /// Price before a markdown, as a decimal string
    pub old_price: Option<String>,

    /// Whole percentage off the old price; zero without a markdown
    pub discount_percent: u8,

    pub category_uuid: Option<Uuid>,

    pub brand_uuid: Option<Uuid>,

    /// Whether the product shows up in storefront listings
    pub is_active: bool,

    /// Units in stock
    pub quantity: u32,

    /// One of "in_stock", "limited", "out_of_stock"
    pub availability: String,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into_uuid(),
            availability: product.availability().as_str().to_string(),
            discount_percent: product.discount_percent(),
            name: product.name,
            slug: product.slug,
            sku: product.sku,
            description: product.description,
            price: product.price.to_string(),
            old_price: product.old_price.map(|price| price.to_string()),
            category_uuid: product.category_uuid.map(Into::into),
            brand_uuid: product.brand_uuid.map(Into::into),
            is_active: product.is_active,
            quantity: product.quantity,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(
    name = "products.get",
    skip(product, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductUuid::from_uuid(product.into_inner());

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
