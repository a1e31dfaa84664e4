//! Staff roles

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a member of staff (or a shopper) may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,

    /// Handles orders.
    Manager,

    /// Maintains the catalog.
    ContentManager,

    /// Everything.
    Admin,
}

impl Role {
    /// Stable identifier used in storage and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Manager => "manager",
            Self::ContentManager => "content_manager",
            Self::Admin => "admin",
        }
    }

    /// Order listing and status changes.
    pub fn can_manage_orders(self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }

    /// Product creation and stock updates.
    pub fn can_manage_catalog(self) -> bool {
        matches!(self, Self::ContentManager | Self::Admin)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "customer" => Ok(Self::Customer),
            "manager" => Ok(Self::Manager),
            "content_manager" => Ok(Self::ContentManager),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_by_role() {
        assert!(Role::Manager.can_manage_orders(), "managers handle orders");
        assert!(!Role::Manager.can_manage_catalog(), "managers do not edit the catalog");
        assert!(
            Role::ContentManager.can_manage_catalog(),
            "content managers edit the catalog"
        );
        assert!(
            !Role::ContentManager.can_manage_orders(),
            "content managers do not handle orders"
        );
        assert!(
            Role::Admin.can_manage_orders() && Role::Admin.can_manage_catalog(),
            "admins do both"
        );
        assert!(!Role::Customer.can_manage_orders(), "customers do neither");
    }
}
