//! Manage Orders Index Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::QueryParam, prelude::*};

use gearlock::orders::OrderStatus;
use gearlock_app::domain::orders::data::OrderFilter;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, responses::OrdersResponse},
    state::State,
};

fn parse_timestamp(value: Option<String>, brief: &str) -> Result<Option<Timestamp>, StatusError> {
    value
        .map(|value| value.parse::<Timestamp>().or_400(brief))
        .transpose()
}

/// Manage Orders Index Handler
///
/// Lists every order, newest first, optionally narrowed by status and placement time.
#[endpoint(
    tags("manage"),
    summary = "List Orders",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Matching orders"),
        (
            status_code = StatusCode::BAD_REQUEST,
            description = "Unknown status or malformed timestamp"
        ),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing or invalid staff token"),
        (status_code = StatusCode::FORBIDDEN, description = "Staff role may not manage orders"),
    ),
)]
#[tracing::instrument(
    name = "manage.orders.index",
    skip(status, from, to, depot),
    fields(status = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = status
        .into_inner()
        .map(|status| status.parse::<OrderStatus>().or_400("unknown order status"))
        .transpose()?;

    if let Some(status) = status {
        tracing::Span::current().record("status", status.as_str());
    }

    let filter = OrderFilter {
        status,
        created_from: parse_timestamp(from.into_inner(), "from must be an RFC 3339 timestamp")?,
        created_to: parse_timestamp(to.into_inner(), "to must be an RFC 3339 timestamp")?,
    };

    let orders = state
        .app
        .orders
        .list_orders(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(orders.into()))
}

#[cfg(test)]
mod tests {
    use gearlock_app::domain::orders::records::OrderUuid;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, make_order, staff_service};

    use super::*;

    fn make_service(services: TestServices) -> Service {
        staff_service(services, Router::with_path("manage/orders").get(handler))
    }

    #[tokio::test]
    async fn test_lists_all_orders_without_filter() -> TestResult {
        let mut services = TestServices::default();

        services
            .orders
            .expect_list_orders()
            .once()
            .withf(|filter| *filter == OrderFilter::default())
            .return_once(|_| Ok(vec![make_order(OrderUuid::new(), OrderStatus::New)]));

        let mut res = TestClient::get("http://example.com/manage/orders")
            .send(&make_service(services))
            .await;

        let body: OrdersResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.orders.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_filters_are_forwarded() -> TestResult {
        let from: Timestamp = "2026-01-01T00:00:00Z".parse()?;
        let to: Timestamp = "2026-02-01T00:00:00Z".parse()?;

        let mut services = TestServices::default();

        services
            .orders
            .expect_list_orders()
            .once()
            .withf(move |filter| {
                *filter
                    == OrderFilter {
                        status: Some(OrderStatus::Shipped),
                        created_from: Some(from),
                        created_to: Some(to),
                    }
            })
            .return_once(|_| Ok(Vec::new()));

        let url = concat!(
            "http://example.com/manage/orders?status=shipped",
            "&from=2026-01-01T00:00:00Z&to=2026-02-01T00:00:00Z",
        );

        let res = TestClient::get(url)
        .send(&make_service(services))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_filter_returns_400() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_list_orders().never();

        let res = TestClient::get("http://example.com/manage/orders?status=lost")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_timestamp_returns_400() -> TestResult {
        let mut services = TestServices::default();

        services.orders.expect_list_orders().never();

        let res = TestClient::get("http://example.com/manage/orders?from=yesterday")
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
