//! Orders
//!
//! Checkout turns a cart into an order: validated buyer details, one line per cart line with
//! its price and quantity captured, and a total fixed at placement. Staff then move the order
//! through its [`OrderStatus`] lifecycle.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

mod buyer;
mod materialize;
mod payment;
mod status;

pub use buyer::{
    Buyer, BuyerDetails, CODE_MAX_LENGTH, EMAIL_MAX_LENGTH, FieldError, NAME_MAX_LENGTH,
    ValidationErrors,
};
pub use materialize::{MaterializeError, NewOrder, NewOrderLine, materialize};
pub use payment::{PaymentMethod, UnknownPaymentMethod};
pub use status::{
    OrderStatus, StatusChange, TransitionPolicy, UnknownStatus, UnknownTransitionPolicy,
    request_status_change,
};

/// Whether placing an order depletes catalog stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockPolicy {
    /// Orders never touch product quantities.
    #[default]
    Untracked,

    /// Each line decrements its product's quantity at commit, only if enough stock is left.
    /// One unsatisfiable line aborts the whole order.
    Reserve,
}

impl StockPolicy {
    /// Stable identifier used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Untracked => "untracked",
            Self::Reserve => "reserve",
        }
    }
}

impl Display for StockPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no stock policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stock policy: {0}")]
pub struct UnknownStockPolicy(pub String);

impl FromStr for StockPolicy {
    type Err = UnknownStockPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "untracked" => Ok(Self::Untracked),
            "reserve" => Ok(Self::Reserve),
            other => Err(UnknownStockPolicy(other.to_string())),
        }
    }
}
