//! Manage Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use gearlock_app::domain::orders::records::OrderUuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderResponse},
    state::State,
};

/// Manage Order Handler
#[endpoint(
    tags("manage"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
#[tracing::instrument(
    name = "manage.orders.get",
    skip(order, depot),
    fields(order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = OrderUuid::from_uuid(order.into_inner());

    tracing::Span::current().record("order_uuid", tracing::field::display(order));

    let order = state
        .app
        .orders
        .get_order(order)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use gearlock::orders::OrderStatus;
    use gearlock_app::domain::orders::OrdersServiceError;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, make_order, staff_service};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        staff_service(services, Router::with_path("manage/orders/{order}").get(handler))
    }

    #[tokio::test]
    async fn test_get_any_order() -> TestResult {
        let uuid = OrderUuid::new();

        let mut services = TestServices::default();

        services
            .orders
            .expect_get_order()
            .once()
            .withf(move |order| *order == uuid)
            .return_once(move |_| Ok(make_order(uuid, OrderStatus::New)));

        let mut res = TestClient::get(&format!("http://example.com/manage/orders/{uuid}"))
            .send(&make_service(services))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.buyer.email, "ada@example.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_order_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::NotFound));

        let res = TestClient::get(&format!("http://example.com/manage/orders/{}", Uuid::now_v7()))
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
