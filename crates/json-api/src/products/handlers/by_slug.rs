//! Get Product By Slug Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Get Product By Slug Handler
///
/// Returns the product published under a slug.
#[endpoint(
    tags("products"),
    summary = "Get Product By Slug",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(name = "products.by_slug", skip(slug, depot), err)]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product_by_slug(slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use gearlock_app::domain::products::{ProductsServiceError, records::ProductUuid};

    use crate::test_helpers::{TestServices, customer_service, make_product};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        customer_service(
            services,
            Router::with_path("products/by-slug/{slug}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_by_slug_returns_product() -> TestResult {
        let uuid = ProductUuid::new();

        let mut services = TestServices::default();

        services
            .products
            .expect_get_product_by_slug()
            .once()
            .withf(|slug| slug == "chain-lube")
            .return_once(move |_| Ok(make_product(uuid, Decimal::new(7_50, 2), 9)));

        let mut res = TestClient::get("http://example.com/products/by-slug/chain-lube")
            .send(&make_service(services))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.slug, "chain-lube");

        Ok(())
    }

    #[tokio::test]
    async fn test_by_unknown_slug_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .products
            .expect_get_product_by_slug()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get("http://example.com/products/by-slug/nowhere")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
