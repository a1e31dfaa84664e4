//! Order status lifecycle.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet picked up by staff.
    #[default]
    New,

    /// Being prepared.
    Processing,

    /// Handed to the carrier.
    Shipped,

    /// Received by the buyer.
    Delivered,

    /// Abandoned before delivery.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Stable identifier used in storage and payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether no further transition is expected.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Position along the forward lifecycle; `None` for cancelled.
    fn rank(self) -> Option<u8> {
        match self {
            Self::New => Some(0),
            Self::Processing => Some(1),
            Self::Shipped => Some(2),
            Self::Delivered => Some(3),
            Self::Cancelled => None,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Which status moves are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may move to any other.
    #[default]
    Unrestricted,

    /// `new → processing → shipped → delivered`, forward only, with `cancelled` reachable
    /// from any non-terminal status.
    ForwardOnly,
}

impl TransitionPolicy {
    /// Whether `from → to` is allowed. Staying put is always allowed.
    pub fn allows(self, from: OrderStatus, to: OrderStatus) -> bool {
        if from == to {
            return true;
        }

        match self {
            Self::Unrestricted => true,
            Self::ForwardOnly => {
                if from.is_terminal() {
                    return false;
                }

                match (from.rank(), to.rank()) {
                    (_, None) => true,
                    (Some(from), Some(to)) => to > from,
                    (None, Some(_)) => false,
                }
            }
        }
    }
}

impl TransitionPolicy {
    /// Stable identifier used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unrestricted => "unrestricted",
            Self::ForwardOnly => "forward-only",
        }
    }
}

impl Display for TransitionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no transition policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transition policy: {0}")]
pub struct UnknownTransitionPolicy(pub String);

impl FromStr for TransitionPolicy {
    type Err = UnknownTransitionPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "unrestricted" => Ok(Self::Unrestricted),
            "forward-only" => Ok(Self::ForwardOnly),
            other => Err(UnknownTransitionPolicy(other.to_string())),
        }
    }
}

/// Outcome of a status change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The status moved.
    Changed {
        /// Previous status
        from: OrderStatus,

        /// New status
        to: OrderStatus,
    },

    /// The requested status equals the current one.
    Unchanged,

    /// The request named no status or a move the policy forbids. Nothing happens.
    Ignored,
}

impl StatusChange {
    /// The status the order should hold after the request.
    pub fn resulting(self, current: OrderStatus) -> OrderStatus {
        match self {
            Self::Changed { to, .. } => to,
            Self::Unchanged | Self::Ignored => current,
        }
    }
}

/// Decide what a manager's status request does to an order currently in `current`.
pub fn request_status_change(
    current: OrderStatus,
    requested: &str,
    policy: TransitionPolicy,
) -> StatusChange {
    let Ok(to) = requested.parse::<OrderStatus>() else {
        return StatusChange::Ignored;
    };

    if to == current {
        return StatusChange::Unchanged;
    }

    if policy.allows(current, to) {
        StatusChange::Changed { from: current, to }
    } else {
        StatusChange::Ignored
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn statuses_parse_from_their_identifiers() -> TestResult {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn unknown_value_is_ignored() {
        assert_eq!(
            request_status_change(OrderStatus::New, "teleported", TransitionPolicy::Unrestricted),
            StatusChange::Ignored
        );
    }

    #[test]
    fn padded_or_recased_status_is_ignored() {
        for requested in [" shipped\n", "Shipped", "shipped ", "SHIPPED"] {
            assert_eq!(
                request_status_change(OrderStatus::New, requested, TransitionPolicy::Unrestricted),
                StatusChange::Ignored,
                "{requested:?} is not an exact status identifier"
            );
        }
    }

    #[test]
    fn same_status_is_unchanged() {
        assert_eq!(
            request_status_change(OrderStatus::Shipped, "shipped", TransitionPolicy::ForwardOnly),
            StatusChange::Unchanged
        );
    }

    #[test]
    fn unrestricted_allows_moving_backwards() {
        assert_eq!(
            request_status_change(
                OrderStatus::Delivered,
                "new",
                TransitionPolicy::Unrestricted
            ),
            StatusChange::Changed {
                from: OrderStatus::Delivered,
                to: OrderStatus::New,
            }
        );
    }

    #[test]
    fn forward_only_table() {
        let policy = TransitionPolicy::ForwardOnly;

        assert!(
            policy.allows(OrderStatus::New, OrderStatus::Processing),
            "new -> processing"
        );
        assert!(
            policy.allows(OrderStatus::New, OrderStatus::Shipped),
            "new -> shipped"
        );
        assert!(
            policy.allows(OrderStatus::Shipped, OrderStatus::Cancelled),
            "shipped -> cancelled"
        );
        assert!(
            !policy.allows(OrderStatus::Shipped, OrderStatus::Processing),
            "shipped -> processing"
        );
        assert!(
            !policy.allows(OrderStatus::Delivered, OrderStatus::Cancelled),
            "delivered -> cancelled"
        );
        assert!(
            !policy.allows(OrderStatus::Cancelled, OrderStatus::New),
            "cancelled -> new"
        );
    }

    #[test]
    fn ignored_request_keeps_current_status() {
        let change = request_status_change(
            OrderStatus::Delivered,
            "processing",
            TransitionPolicy::ForwardOnly,
        );

        assert_eq!(change, StatusChange::Ignored);
        assert_eq!(change.resulting(OrderStatus::Delivered), OrderStatus::Delivered);
    }
}
