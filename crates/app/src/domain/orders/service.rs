//! Orders service.

use async_trait::async_trait;
use gearlock::{
    cart::Cart,
    orders::{BuyerDetails, NewOrder, StatusChange, StockPolicy, materialize, request_status_change},
};
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::repository::PgCartSessionsRepository,
        orders::{
            data::{CheckoutSettings, OrderFilter},
            errors::OrdersServiceError,
            records::{OrderRecord, OrderUuid},
            repositories::{PgOrderLinesRepository, PgOrdersRepository},
        },
        products::repository::PgProductsRepository,
        sessions::SessionUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    settings: CheckoutSettings,
    orders_repository: PgOrdersRepository,
    lines_repository: PgOrderLinesRepository,
    sessions_repository: PgCartSessionsRepository,
    products_repository: PgProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, settings: CheckoutSettings) -> Self {
        Self {
            db,
            settings,
            orders_repository: PgOrdersRepository::new(),
            lines_repository: PgOrderLinesRepository::new(),
            sessions_repository: PgCartSessionsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }

    async fn reserve_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<(), OrdersServiceError> {
        if self.settings.stock_policy == StockPolicy::Untracked {
            return Ok(());
        }

        for line in &order.lines {
            let reserved = self
                .products_repository
                .reserve_quantity(tx, line.product_id, line.quantity)
                .await?;

            if !reserved {
                return Err(OrdersServiceError::OutOfStock {
                    product_name: line.product_name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(
        &self,
        session: SessionUuid,
        details: BuyerDetails,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.sessions_repository.load_cart(&mut tx, session).await?;

        if cart.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let buyer = details.validate()?;
        let order = materialize(&cart, buyer)?;

        self.reserve_stock(&mut tx, &order).await?;

        let mut created = self
            .orders_repository
            .create_order(&mut tx, OrderUuid::new(), session, &order)
            .await?;

        created.lines = self
            .lines_repository
            .create_lines(&mut tx, created.uuid, &order.lines)
            .await?;

        self.sessions_repository
            .save_cart(&mut tx, session, &Cart::new())
            .await?;

        tx.commit().await?;

        info!(
            order = %created.uuid,
            %session,
            lines = created.lines.len(),
            total_price = %created.total_price,
            "order placed"
        );

        Ok(created)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = vec![self.orders_repository.get_order(&mut tx, order).await?];

        self.lines_repository.load_lines(&mut tx, &mut orders).await?;

        tx.commit().await?;

        orders.pop().ok_or(OrdersServiceError::NotFound)
    }

    async fn get_session_order(
        &self,
        session: SessionUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = vec![
            self.orders_repository
                .get_session_order(&mut tx, session, order)
                .await?,
        ];

        self.lines_repository.load_lines(&mut tx, &mut orders).await?;

        tx.commit().await?;

        orders.pop().ok_or(OrdersServiceError::NotFound)
    }

    async fn list_session_orders(
        &self,
        session: SessionUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self
            .orders_repository
            .list_session_orders(&mut tx, session)
            .await?;

        self.lines_repository.load_lines(&mut tx, &mut orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders(
        &self,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self.orders_repository.list_orders(&mut tx, &filter).await?;

        self.lines_repository.load_lines(&mut tx, &mut orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn change_status(
        &self,
        order: OrderUuid,
        requested: String,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.orders_repository.lock_order(&mut tx, order).await?;

        let change =
            request_status_change(current.status, &requested, self.settings.transition_policy);

        let record = match change {
            StatusChange::Changed { from, to } => {
                let updated = self
                    .orders_repository
                    .update_status(&mut tx, order, to)
                    .await?;

                info!(%order, %from, %to, "order status changed");

                updated
            }
            StatusChange::Unchanged => current,
            StatusChange::Ignored => {
                debug!(%order, status = %current.status, %requested, "status change ignored");

                current
            }
        };

        let mut orders = vec![record];

        self.lines_repository.load_lines(&mut tx, &mut orders).await?;

        tx.commit().await?;

        orders.pop().ok_or(OrdersServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the session's cart into an order in one transaction and empty the cart.
    async fn place_order(
        &self,
        session: SessionUuid,
        details: BuyerDetails,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve any order with its lines.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve an order only if `session` placed it.
    async fn get_session_order(
        &self,
        session: SessionUuid,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Orders placed by `session`, newest first.
    async fn list_session_orders(
        &self,
        session: SessionUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Orders matching the filter, newest first.
    async fn list_orders(
        &self,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Move an order to the `requested` status.
    ///
    /// Unknown or disallowed statuses are ignored and the order is returned unchanged.
    async fn change_status(
        &self,
        order: OrderUuid,
        requested: String,
    ) -> Result<OrderRecord, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use gearlock::orders::{OrderStatus, TransitionPolicy};
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::CartsService,
            products::{ProductsService, ProductsServiceError},
        },
        test::{TestContext, add_to_cart, buyer_details, stocked_product},
    };

    use super::*;

    async fn count_order_lines(ctx: &TestContext) -> i64 {
        sqlx::query_scalar("SELECT count(*) FROM order_lines")
            .fetch_one(ctx.db.pool())
            .await
            .expect("order lines should be countable")
    }

    #[tokio::test]
    async fn place_order_stores_lines_and_empties_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionUuid::new();

        let chain = stocked_product(&ctx, "Chain", Decimal::new(25_00, 2), 10).await;
        let tyre = stocked_product(&ctx, "Tyre", Decimal::new(40_50, 2), 4).await;

        add_to_cart(&ctx, session, chain.uuid, 2).await;
        add_to_cart(&ctx, session, tyre.uuid, 1).await;

        let order = ctx.orders.place_order(session, buyer_details()).await?;

        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.total_price, Decimal::new(90_50, 2));
        assert_eq!(
            order
                .lines
                .iter()
                .map(|line| (line.product_uuid, line.quantity))
                .collect::<Vec<_>>(),
            vec![(chain.uuid, 2), (tyre.uuid, 1)]
        );

        let stored = ctx.orders.get_session_order(session, order.uuid).await?;

        assert_eq!(stored, order);
        assert!(ctx.carts.get_cart(session).await?.items.is_empty(), "cart should be emptied");

        let untouched = ctx.products.get_product(chain.uuid).await?;

        assert_eq!(untouched.quantity, 10, "untracked stock is left alone");

        Ok(())
    }

    #[tokio::test]
    async fn failed_line_insert_leaves_no_order_header() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionUuid::new();

        let pump = stocked_product(&ctx, "Pump", Decimal::new(15, 0), 3).await;
        let bell = stocked_product(&ctx, "Bell", Decimal::new(5, 0), 3).await;

        add_to_cart(&ctx, session, pump.uuid, 1).await;
        add_to_cart(&ctx, session, bell.uuid, 1).await;

        ctx.products.delete_product(bell.uuid).await?;

        let result = ctx.orders.place_order(session, buyer_details()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
        assert_eq!(ctx.count_orders().await, 0, "header must roll back with its lines");
        assert_eq!(count_order_lines(&ctx).await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_is_refused() {
        let ctx = TestContext::new().await;

        let result = ctx
            .orders
            .place_order(SessionUuid::new(), buyer_details())
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[tokio::test]
    async fn invalid_buyer_details_keep_the_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionUuid::new();

        let lamp = stocked_product(&ctx, "Lamp", Decimal::new(12, 0), 2).await;

        add_to_cart(&ctx, session, lamp.uuid, 1).await;

        let mut details = buyer_details();
        details.email = "not-an-email".to_string();

        let result = ctx.orders.place_order(session, details).await;

        assert!(
            matches!(result, Err(OrdersServiceError::Validation(_))),
            "expected Validation, got {result:?}"
        );
        assert_eq!(ctx.count_orders().await, 0);
        assert_eq!(ctx.carts.get_cart(session).await?.total_quantity, 1);

        Ok(())
    }

    #[tokio::test]
    async fn reserve_policy_takes_ordered_units_from_stock() -> TestResult {
        let ctx = TestContext::reserving().await;
        let session = SessionUuid::new();

        let light = stocked_product(&ctx, "Light", Decimal::new(20, 0), 5).await;

        add_to_cart(&ctx, session, light.uuid, 3).await;

        ctx.orders.place_order(session, buyer_details()).await?;

        assert_eq!(ctx.products.get_product(light.uuid).await?.quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn reserve_shortfall_aborts_the_whole_order() -> TestResult {
        let ctx = TestContext::reserving().await;
        let session = SessionUuid::new();

        let saddle = stocked_product(&ctx, "Saddle", Decimal::new(50, 0), 5).await;
        let pedal = stocked_product(&ctx, "Pedal", Decimal::new(30, 0), 3).await;

        add_to_cart(&ctx, session, saddle.uuid, 2).await;
        add_to_cart(&ctx, session, pedal.uuid, 3).await;

        ctx.products.set_quantity(pedal.uuid, 1).await?;

        let result = ctx.orders.place_order(session, buyer_details()).await;

        assert!(
            matches!(
                &result,
                Err(OrdersServiceError::OutOfStock { product_name }) if product_name == "Pedal"
            ),
            "expected OutOfStock for Pedal, got {result:?}"
        );
        assert_eq!(
            ctx.products.get_product(saddle.uuid).await?.quantity,
            5,
            "the saddle reservation must roll back"
        );
        assert_eq!(ctx.products.get_product(pedal.uuid).await?.quantity, 1);
        assert_eq!(ctx.count_orders().await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn ordered_product_cannot_be_deleted() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionUuid::new();

        let wheel = stocked_product(&ctx, "Wheel", Decimal::new(99, 0), 2).await;

        add_to_cart(&ctx, session, wheel.uuid, 1).await;
        ctx.orders.place_order(session, buyer_details()).await?;

        let result = ctx.products.delete_product(wheel.uuid).await;

        assert!(
            matches!(result, Err(ProductsServiceError::InUse)),
            "expected InUse, got {result:?}"
        );
        assert_eq!(ctx.products.get_product(wheel.uuid).await?.uuid, wheel.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn other_sessions_cannot_read_an_order() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionUuid::new();

        let grip = stocked_product(&ctx, "Grip", Decimal::new(8, 0), 2).await;

        add_to_cart(&ctx, session, grip.uuid, 1).await;
        let order = ctx.orders.place_order(session, buyer_details()).await?;

        let result = ctx
            .orders
            .get_session_order(SessionUuid::new(), order.uuid)
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert!(ctx.orders.list_session_orders(SessionUuid::new()).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn status_change_is_stored() -> TestResult {
        let ctx = TestContext::new().await;
        let session = SessionUuid::new();

        let grip = stocked_product(&ctx, "Grip", Decimal::new(8, 0), 2).await;

        add_to_cart(&ctx, session, grip.uuid, 1).await;
        let order = ctx.orders.place_order(session, buyer_details()).await?;

        let changed = ctx
            .orders
            .change_status(order.uuid, "shipped".to_string())
            .await?;

        assert_eq!(changed.status, OrderStatus::Shipped);
        assert_eq!(changed.lines.len(), 1);
        assert!(changed.updated_at >= order.updated_at, "updated_at moves forward");

        let shipped = ctx
            .orders
            .list_orders(OrderFilter {
                status: Some(OrderStatus::Shipped),
                ..OrderFilter::default()
            })
            .await?;

        assert_eq!(shipped.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn ignored_status_request_leaves_the_row_untouched() -> TestResult {
        let ctx = TestContext::with_settings(CheckoutSettings {
            stock_policy: StockPolicy::Untracked,
            transition_policy: TransitionPolicy::ForwardOnly,
        })
        .await;
        let session = SessionUuid::new();

        let grip = stocked_product(&ctx, "Grip", Decimal::new(8, 0), 2).await;

        add_to_cart(&ctx, session, grip.uuid, 1).await;
        let order = ctx.orders.place_order(session, buyer_details()).await?;
        let delivered = ctx
            .orders
            .change_status(order.uuid, "delivered".to_string())
            .await?;

        for requested in ["processing", "teleported", " shipped\n"] {
            let returned = ctx
                .orders
                .change_status(order.uuid, requested.to_string())
                .await?;

            assert_eq!(returned.status, OrderStatus::Delivered, "{requested:?}");
            assert_eq!(returned.updated_at, delivered.updated_at, "{requested:?}");
        }

        let stored = ctx.orders.get_order(order.uuid).await?;

        assert_eq!(stored.status, OrderStatus::Delivered);
        assert_eq!(stored.updated_at, delivered.updated_at);

        Ok(())
    }
}
