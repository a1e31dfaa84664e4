//! Show Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    cart::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Show Cart Handler
///
/// Returns the session's cart after correcting it against live stock.
#[endpoint(
    tags("cart"),
    summary = "Show Cart",
    responses(
        (status_code = StatusCode::OK, description = "Current cart"),
    ),
)]
#[tracing::instrument(
    name = "cart.show",
    skip(depot),
    fields(session_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = depot.session_uuid_or_500()?;

    tracing::Span::current().record("session_uuid", tracing::field::display(session));

    let cart = state
        .app
        .carts
        .get_cart(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use gearlock::{notices::Notices, products::Availability};
    use gearlock_app::domain::{
        carts::data::{CartItemView, CartSnapshot},
        products::records::ProductUuid,
    };
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TEST_SESSION_UUID, TestServices, customer_service};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        customer_service(services, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_show_cart_with_items_and_notices() -> TestResult {
        let product = ProductUuid::new();

        let mut notices = Notices::new();

        notices.warning("Only 3 \"Chain Lube\" left, quantity adjusted");

        let snapshot = CartSnapshot {
            items: vec![CartItemView {
                product_uuid: product,
                product_name: "Chain Lube".to_string(),
                unit_price: Decimal::new(7_50, 2),
                quantity: 3,
                total_price: Decimal::new(22_50, 2),
                available_quantity: 3,
                availability: Availability::Limited,
            }],
            total_quantity: 3,
            total_price: Decimal::new(22_50, 2),
            notices,
        };

        let mut services = TestServices::default();

        services
            .carts
            .expect_get_cart()
            .once()
            .withf(|session| *session == TEST_SESSION_UUID)
            .return_once(move |_| Ok(snapshot));

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(services))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items.len(), 1);
        assert_eq!(body.items[0].product_uuid, product.into_uuid());
        assert_eq!(body.items[0].availability, "limited");
        assert_eq!(body.total_quantity, 3);
        assert_eq!(body.total_price, "22.50");
        assert_eq!(body.notices.len(), 1);
        assert_eq!(body.notices[0].level, "warning");

        Ok(())
    }

    #[tokio::test]
    async fn test_show_empty_cart() -> TestResult {
        let mut services = TestServices::default();

        services
            .carts
            .expect_get_cart()
            .once()
            .return_once(|_| Ok(CartSnapshot::default()));

        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service(services))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert!(body.items.is_empty());
        assert_eq!(body.total_quantity, 0);
        assert_eq!(body.total_price, "0");

        Ok(())
    }
}
