//! Change Order Status Handler

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

use gearlock_app::domain::orders::records::OrderUuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrderResponse},
    state::State,
};

/// Change Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChangeStatusRequest {
    /// Requested status; unknown or disallowed values leave the order unchanged
    pub status: String,
}

/// Change Order Status Handler
///
/// Returns the order as it stands after the request.
#[endpoint(
    tags("manage"),
    summary = "Change Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order after the request"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
    ),
)]
#[tracing::instrument(
    name = "manage.orders.status",
    skip(order, json, depot),
    fields(
        order_uuid = tracing::field::Empty,
        staff_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<ChangeStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_member_or_401()?.uuid;
    let order = OrderUuid::from_uuid(order.into_inner());

    let span = tracing::Span::current();

    span.record("order_uuid", tracing::field::display(order));
    span.record("staff_uuid", tracing::field::display(staff));

    let order = state
        .app
        .orders
        .change_status(order, json.into_inner().status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use gearlock::orders::OrderStatus;
    use gearlock_app::domain::orders::OrdersServiceError;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, make_order, staff_service};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        staff_service(
            services,
            Router::with_path("manage/orders/{order}/status").put(handler),
        )
    }

    #[tokio::test]
    async fn test_change_status() -> TestResult {
        let uuid = OrderUuid::new();

        let mut services = TestServices::default();

        services
            .orders
            .expect_change_status()
            .once()
            .withf(move |order, requested| *order == uuid && requested == "shipped")
            .return_once(move |_, _| Ok(make_order(uuid, OrderStatus::Shipped)));

        let mut res = TestClient::put(&format!("http://example.com/manage/orders/{uuid}/status"))
            .json(&json!({ "status": "shipped" }))
            .send(&make_service(services))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "shipped");

        Ok(())
    }

    #[tokio::test]
    async fn test_ignored_status_returns_unchanged_order() -> TestResult {
        let uuid = OrderUuid::new();

        let mut services = TestServices::default();

        services
            .orders
            .expect_change_status()
            .once()
            .withf(|_, requested| requested == "teleported")
            .return_once(move |_, _| Ok(make_order(uuid, OrderStatus::Processing)));

        let mut res = TestClient::put(&format!("http://example.com/manage/orders/{uuid}/status"))
            .json(&json!({ "status": "teleported" }))
            .send(&make_service(services))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "processing");

        Ok(())
    }

    #[tokio::test]
    async fn test_change_status_of_missing_order_returns_404() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_change_status()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::put(&format!(
            "http://example.com/manage/orders/{}/status",
            Uuid::now_v7()
        ))
        .json(&json!({ "status": "shipped" }))
        .send(&make_service(services))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
