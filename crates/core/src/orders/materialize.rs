//! Turning a cart into an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::Cart,
    orders::{Buyer, OrderStatus},
    products::ProductId,
};

/// Snapshot of one cart line, as stored on the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    /// Referenced product
    pub product_id: ProductId,

    /// Product name when the order was placed
    pub product_name: String,

    /// Unit price captured in the cart
    pub price: Decimal,

    /// Ordered units
    pub quantity: u32,
}

impl NewOrderLine {
    /// `price * quantity`
    pub fn total_price(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An order ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Buyer, shipping and payment details
    pub buyer: Buyer,

    /// Initial status, always [`OrderStatus::New`]
    pub status: OrderStatus,

    /// Total computed from the cart once, at placement
    pub total_price: Decimal,

    /// One line per cart line, in cart order
    pub lines: Vec<NewOrderLine>,
}

impl NewOrder {
    /// Sum of line totals. Equals `total_price` for any materialized order.
    pub fn lines_total(&self) -> Decimal {
        self.lines.iter().map(NewOrderLine::total_price).sum()
    }
}

/// Reasons a cart cannot become an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterializeError {
    /// Orders need at least one line.
    #[error("cart is empty")]
    EmptyCart,
}

/// Snapshot `cart` into a new order for `buyer`.
///
/// Availability is not checked again here; the cart's last reconciled state is trusted.
/// The caller persists the result and then clears the cart.
///
/// # Errors
///
/// Returns [`MaterializeError::EmptyCart`] when the cart has no lines.
pub fn materialize(cart: &Cart, buyer: Buyer) -> Result<NewOrder, MaterializeError> {
    if cart.is_empty() {
        return Err(MaterializeError::EmptyCart);
    }

    let lines = cart
        .lines()
        .iter()
        .map(|line| NewOrderLine {
            product_id: line.product_id,
            product_name: line.product_name.clone(),
            price: line.unit_price,
            quantity: line.quantity,
        })
        .collect();

    Ok(NewOrder {
        buyer,
        status: OrderStatus::New,
        total_price: cart.total_price(),
        lines,
    })
}
