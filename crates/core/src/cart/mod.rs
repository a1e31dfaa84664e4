//! Cart
//!
//! The working set of products a visitor intends to buy. Each line captures the unit price
//! and product name when it is first added; availability is enforced whenever a line is
//! mutated and corrected again at view time by [`Cart::reconcile`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    notices::Notices,
    products::{Product, ProductId},
};

mod errors;
mod items;
mod reconcile;
mod session;

pub use errors::{CartCodecError, CartError};
pub use items::{CartItem, CartItems};
pub use reconcile::Adjustment;
pub use session::CART_SCHEMA_VERSION;

/// One product's held quantity plus the price and name captured when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product key
    pub product_id: ProductId,

    /// Product name at add-time
    pub product_name: String,

    /// Unit price at add-time
    pub unit_price: Decimal,

    /// Held quantity, always at least one
    pub quantity: u32,
}

impl CartLine {
    /// `unit_price * quantity`
    pub fn total_price(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// How a requested quantity combines with a line already in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantityMode {
    /// Add to the held quantity.
    #[default]
    Increment,

    /// Replace the held quantity.
    Replace,
}

impl QuantityMode {
    /// Map the `override_quantity` flag onto a mode.
    pub fn from_override(override_quantity: bool) -> Self {
        if override_quantity {
            Self::Replace
        } else {
            Self::Increment
        }
    }
}

/// Whether a successful add created a line or changed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionKind {
    /// The product was put in the cart, or more units were added.
    Added,

    /// The held quantity was replaced.
    Updated,
}

/// Success descriptor returned by [`Cart::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartAddition {
    /// Product key
    pub product_id: ProductId,

    /// Product name used in the message
    pub product_name: String,

    /// Quantity held after the change
    pub quantity: u32,

    /// What happened
    pub kind: AdditionKind,
}

impl CartAddition {
    /// Shopper-facing description of the change.
    pub fn message(&self) -> String {
        match self.kind {
            AdditionKind::Added => format!("\"{}\" added to cart", self.product_name),
            AdditionKind::Updated => format!("quantity of \"{}\" updated", self.product_name),
        }
    }
}

/// Session-scoped cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`, or replace the held quantity when `mode` is
    /// [`QuantityMode::Replace`].
    ///
    /// The resulting quantity is compared against the product's available quantity before
    /// anything is written; a refused change leaves the cart untouched. When `notices` is
    /// given, the outcome is also reported there.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] when the quantity is zero or the resulting quantity would
    /// exceed the available stock.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        mode: QuantityMode,
        notices: Option<&mut Notices>,
    ) -> Result<CartAddition, CartError> {
        let result = self.apply_add(product, quantity, mode);

        if let Some(notices) = notices {
            match &result {
                Ok(addition) => notices.success(addition.message()),
                Err(error) => notices.error(error.to_string()),
            }
        }

        result
    }

    fn apply_add(
        &mut self,
        product: &Product,
        quantity: u32,
        mode: QuantityMode,
    ) -> Result<CartAddition, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let available = product.available_quantity;

        if let Some(line) = self.line_mut(product.id) {
            let (quantity, kind) = match mode {
                QuantityMode::Replace => {
                    if quantity > available {
                        return Err(CartError::ReplaceExceedsStock {
                            product_name: product.name.clone(),
                            available,
                        });
                    }

                    (quantity, AdditionKind::Updated)
                }
                QuantityMode::Increment => {
                    let held = line.quantity;

                    let total = held
                        .checked_add(quantity)
                        .filter(|total| *total <= available)
                        .ok_or_else(|| CartError::AdditionExceedsStock {
                            product_name: product.name.clone(),
                            available,
                            held,
                        })?;

                    (total, AdditionKind::Added)
                }
            };

            line.quantity = quantity;

            return Ok(CartAddition {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity,
                kind,
            });
        }

        if quantity > available {
            return Err(CartError::ReplaceExceedsStock {
                product_name: product.name.clone(),
                available,
            });
        }

        self.lines.push(CartLine {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price: product.price,
            quantity,
        });

        Ok(CartAddition {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            kind: AdditionKind::Added,
        })
    }

    /// Remove the line for `product_id`, if there is one.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let position = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)?;

        Some(self.lines.remove(position))
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::total_price).sum()
    }

    /// Sum of held quantities.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Held quantity for `product_id`, zero when absent.
    pub fn get_item_quantity(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map_or(0, |line| line.quantity)
    }

    /// The line for `product_id`.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Keys of every product in the cart, for fetching live catalog data.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.lines.iter().map(|line| line.product_id).collect()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}
