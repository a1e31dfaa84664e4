//! Order Records

use gearlock::{
    orders::{Buyer, OrderStatus},
    products::ProductId,
};
use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::sessions::SessionUuid, uuids::TypedUuid};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,

    /// Session that placed the order
    pub session_uuid: SessionUuid,

    pub buyer: Buyer,
    pub status: OrderStatus,

    /// Fixed when the order was placed
    pub total_price: Decimal,

    /// Lines in cart order
    pub lines: Vec<OrderLineRecord>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// Order Line Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub product_uuid: ProductId,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLineRecord {
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
