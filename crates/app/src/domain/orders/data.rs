//! Order Data

use gearlock::orders::{OrderStatus, StockPolicy, TransitionPolicy};
use jiff::Timestamp;

/// Manager listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,

    /// Inclusive lower bound on placement time
    pub created_from: Option<Timestamp>,

    /// Exclusive upper bound on placement time
    pub created_to: Option<Timestamp>,
}

/// Checkout behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub stock_policy: StockPolicy,
    pub transition_policy: TransitionPolicy,
}
