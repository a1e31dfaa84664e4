//! Cart Data

use gearlock::{
    cart::CartItem,
    notices::Notices,
    products::{Availability, ProductId},
};
use rust_decimal::Decimal;

/// A cart line joined with its live product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemView {
    pub product_uuid: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub total_price: Decimal,
    pub available_quantity: u32,
    pub availability: Availability,
}

impl From<CartItem<'_>> for CartItemView {
    fn from(item: CartItem<'_>) -> Self {
        Self {
            product_uuid: item.line.product_id,
            product_name: item.line.product_name.clone(),
            unit_price: item.line.unit_price,
            quantity: item.line.quantity,
            total_price: item.total_price,
            available_quantity: item.product.available_quantity,
            availability: item.product.availability(),
        }
    }
}

/// Reconciled cart, as shown to the visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartItemView>,
    pub total_quantity: u64,
    pub total_price: Decimal,
    pub notices: Notices,
}

/// Outcome of a cart mutation plus the cart totals afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CartMutation {
    /// Whether the change was applied
    pub accepted: bool,

    /// Shopper-facing description of what happened
    pub message: String,

    pub total_quantity: u64,
    pub total_price: Decimal,

    /// Live stock of the product touched, for item operations
    pub available_quantity: Option<u32>,

    /// Quantity of that product now held
    pub in_cart_quantity: Option<u32>,
}
