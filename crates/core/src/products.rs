//! Products

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product Key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generate a new time-ordered product id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(value).map(Self)
    }
}

impl From<Uuid> for ProductId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Catalog view of a product, as consulted by the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product key
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Current unit price
    pub price: Decimal,

    /// Units currently purchasable
    pub available_quantity: u32,
}

impl Product {
    /// Stock band derived from the available quantity.
    pub fn availability(&self) -> Availability {
        Availability::from_quantity(self.available_quantity)
    }
}

/// Stock band shown to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// More than [`LIMITED_STOCK_THRESHOLD`] units.
    InStock,

    /// Between one and [`LIMITED_STOCK_THRESHOLD`] units.
    Limited,

    /// Nothing left.
    OutOfStock,
}

/// Largest quantity still reported as limited stock.
pub const LIMITED_STOCK_THRESHOLD: u32 = 10;

impl Availability {
    /// Classify a stock level.
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => Self::OutOfStock,
            1..=LIMITED_STOCK_THRESHOLD => Self::Limited,
            _ => Self::InStock,
        }
    }

    /// Stable identifier used in API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::Limited => "limited",
            Self::OutOfStock => "out_of_stock",
        }
    }
}
