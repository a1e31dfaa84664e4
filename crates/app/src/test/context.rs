//! Services wired to a per-test database.

use gearlock::orders::{StockPolicy, TransitionPolicy};

use crate::{
    database::Db,
    domain::{
        brands::PgBrandsService,
        carts::PgCartsService,
        categories::PgCategoriesService,
        orders::{PgOrdersService, data::CheckoutSettings},
        products::PgProductsService,
        reviews::PgReviewsService,
        staff::PgStaffService,
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) products: PgProductsService,
    pub(crate) categories: PgCategoriesService,
    pub(crate) brands: PgBrandsService,
    pub(crate) carts: PgCartsService,
    pub(crate) orders: PgOrdersService,
    pub(crate) reviews: PgReviewsService,
    pub(crate) staff: PgStaffService,
}

impl TestContext {
    /// Services with the default checkout settings.
    pub(crate) async fn new() -> Self {
        Self::with_settings(CheckoutSettings::default()).await
    }

    /// Services whose checkout takes ordered units out of stock.
    pub(crate) async fn reserving() -> Self {
        Self::with_settings(CheckoutSettings {
            stock_policy: StockPolicy::Reserve,
            transition_policy: TransitionPolicy::default(),
        })
        .await
    }

    pub(crate) async fn with_settings(settings: CheckoutSettings) -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            categories: PgCategoriesService::new(db.clone()),
            brands: PgBrandsService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            orders: PgOrdersService::new(db.clone(), settings),
            reviews: PgReviewsService::new(db.clone()),
            staff: PgStaffService::new(db),
            db: test_db,
        }
    }

    /// Number of order headers stored, whatever their session.
    pub(crate) async fn count_orders(&self) -> i64 {
        sqlx::query_scalar("SELECT count(*) FROM orders")
            .fetch_one(self.db.pool())
            .await
            .expect("orders should be countable")
    }
}
