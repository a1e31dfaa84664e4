//! Update Product Handler

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

use gearlock_app::domain::{
    brands::records::BrandUuid,
    categories::records::CategoryUuid,
    products::{data::ProductUpdate, records::ProductUuid},
};

use crate::{
    extensions::*,
    products::{
        create::{parse_amount, parse_old_price},
        errors::into_status_error,
        get::ProductResponse,
    },
    state::State,
};

/// Update Product Request
///
/// Replaces every editable field. Stock is set through the stock endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,

    /// Unit price as a decimal string, e.g. "19.99"
    pub price: String,

    #[serde(default)]
    pub old_price: Option<String>,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category_uuid: Option<Uuid>,

    #[serde(default)]
    pub brand_uuid: Option<Uuid>,

    pub is_active: bool,
}

impl UpdateProductRequest {
    fn into_update(self) -> Result<ProductUpdate, StatusError> {
        Ok(ProductUpdate {
            price: parse_amount(&self.price, "price")?,
            old_price: parse_old_price(self.old_price.as_deref())?,
            name: self.name,
            sku: self.sku.filter(|sku| !sku.trim().is_empty()),
            description: self.description,
            category: self.category_uuid.map(CategoryUuid::from_uuid),
            brand: self.brand_uuid.map(BrandUuid::from_uuid),
            is_active: self.is_active,
        })
    }
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product, category or brand not found"),
        (status_code = StatusCode::CONFLICT, description = "SKU already taken"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid staff token"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff role may not edit the catalog"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductUuid::from_uuid(product.into_inner());

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let update = json.into_inner().into_update()?;

    let product = state
        .app
        .products
        .update_product(product, update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use gearlock_app::domain::products::{ProductsServiceError, records::ProductRecord};

    use crate::test_helpers::{TestServices, make_product, staff_service};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        staff_service(services, Router::with_path("products/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut services = TestServices::default();

        services
            .products
            .expect_update_product()
            .once()
            .withf(move |product, update| {
                *product == uuid
                    && *update
                        == ProductUpdate {
                            name: "Dry Lube".to_string(),
                            sku: None,
                            description: "For dusty trails".to_string(),
                            price: Decimal::new(9_00, 2),
                            old_price: Some(Decimal::new(12_00, 2)),
                            category: None,
                            brand: None,
                            is_active: true,
                        }
            })
            .return_once(move |_, _| {
                Ok(ProductRecord {
                    name: "Dry Lube".to_string(),
                    old_price: Some(Decimal::new(12_00, 2)),
                    ..make_product(uuid, Decimal::new(9_00, 2), 6)
                })
            });

        let mut res = TestClient::put(&format!("http://example.com/products/{uuid}"))
            .json(&json!({
                "name": "Dry Lube",
                "price": "9.00",
                "old_price": "12.00",
                "sku": " ",
                "description": "For dusty trails",
                "is_active": true
            }))
            .send(&make_service(services))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Dry Lube");
        assert_eq!(body.discount_percent, 25);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_rejects_bad_old_price() -> TestResult {
        let mut services = TestServices::default();

        services.products.expect_update_product().never();

        let res = TestClient::put(&format!("http://example.com/products/{}", Uuid::now_v7()))
            .json(&json!({
                "name": "Dry Lube",
                "price": "9.00",
                "old_price": "-3",
                "is_active": true
            }))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(&format!("http://example.com/products/{}", Uuid::now_v7()))
            .json(&json!({ "name": "Dry Lube", "price": "9.00", "is_active": false }))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
