//! Test helpers.

use std::sync::Arc;

use gearlock::{
    orders::{Buyer, OrderStatus, PaymentMethod},
    roles::Role,
};
use gearlock_app::{
    context::AppContext,
    domain::{
        brands::{
            MockBrandsService,
            records::{BrandRecord, BrandUuid},
        },
        carts::MockCartsService,
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        reviews::MockReviewsService,
        sessions::SessionUuid,
        staff::{
            MockStaffService,
            records::{StaffMember, StaffUuid},
        },
    },
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::{SessionCookie, State},
};

pub(crate) const TEST_SESSION_UUID: SessionUuid = SessionUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_STAFF_UUID: StaffUuid = StaffUuid::from_uuid(Uuid::nil());

/// Service mocks; any call without a matching expectation fails the test.
#[derive(Default)]
pub(crate) struct TestServices {
    pub(crate) products: MockProductsService,
    pub(crate) categories: MockCategoriesService,
    pub(crate) brands: MockBrandsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) reviews: MockReviewsService,
    pub(crate) staff: MockStaffService,
}

impl TestServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                products: Arc::new(self.products),
                categories: Arc::new(self.categories),
                brands: Arc::new(self.brands),
                carts: Arc::new(self.carts),
                orders: Arc::new(self.orders),
                reviews: Arc::new(self.reviews),
                staff: Arc::new(self.staff),
            },
            SessionCookie::default(),
        )
    }
}

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_session_uuid(TEST_SESSION_UUID);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_manager(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_staff_member(make_staff_member(Role::Admin));
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn strict_state() -> Arc<State> {
    TestServices::default().into_state()
}

pub(crate) fn state_with_staff(staff: MockStaffService) -> Arc<State> {
    TestServices {
        staff,
        ..TestServices::default()
    }
    .into_state()
}

/// A service answering as the test customer session.
pub(crate) fn customer_service(services: TestServices, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(services.into_state()))
            .hoop(inject_session)
            .push(route),
    )
}

/// A service answering as an authenticated admin.
pub(crate) fn staff_service(services: TestServices, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(services.into_state()))
            .hoop(inject_manager)
            .push(route),
    )
}

pub(crate) fn make_staff_member(role: Role) -> StaffMember {
    StaffMember {
        uuid: TEST_STAFF_UUID,
        name: "Test Staff".to_string(),
        role,
        created_at: Timestamp::UNIX_EPOCH,
        last_seen_at: None,
    }
}

pub(crate) fn make_product(uuid: ProductUuid, price: Decimal, quantity: u32) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Chain Lube".to_string(),
        slug: "chain-lube".to_string(),
        sku: None,
        description: String::new(),
        price,
        old_price: None,
        quantity,
        category_uuid: None,
        brand_uuid: None,
        is_active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_category(
    uuid: CategoryUuid,
    name: &str,
    parent: Option<CategoryUuid>,
) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: name.to_string(),
        slug: name.to_lowercase(),
        parent_uuid: parent,
        description: String::new(),
        position: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_brand(uuid: BrandUuid, name: &str) -> BrandRecord {
    BrandRecord {
        uuid,
        name: name.to_string(),
        slug: name.to_lowercase(),
        description: String::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_buyer() -> Buyer {
    Buyer {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        address: "12 Analytical Row".to_string(),
        city: "London".to_string(),
        postal_code: "N1 9GU".to_string(),
        payment_method: PaymentMethod::Card,
        notes: String::new(),
    }
}

pub(crate) fn make_order(uuid: OrderUuid, status: OrderStatus) -> OrderRecord {
    let line = OrderLineRecord {
        uuid: OrderLineUuid::from_uuid(Uuid::nil()),
        product_uuid: ProductUuid::from_uuid(Uuid::nil()),
        product_name: "Chain Lube".to_string(),
        price: Decimal::new(100_00, 2),
        quantity: 2,
    };

    OrderRecord {
        uuid,
        session_uuid: TEST_SESSION_UUID,
        buyer: make_buyer(),
        status,
        total_price: line.total_price(),
        lines: vec![line],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
