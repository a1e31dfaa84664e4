//! Checkout Config

use clap::Args;
use gearlock::orders::{StockPolicy, TransitionPolicy};
use gearlock_app::domain::orders::data::CheckoutSettings;

/// Checkout and order lifecycle settings.
#[derive(Debug, Args)]
pub struct CheckoutConfig {
    /// Whether placing an order depletes stock (untracked, reserve)
    #[arg(long, env = "STOCK_POLICY", default_value_t = StockPolicy::Untracked)]
    pub stock_policy: StockPolicy,

    /// Which order status moves managers may make (unrestricted, forward-only)
    #[arg(long, env = "STATUS_TRANSITIONS", default_value_t = TransitionPolicy::Unrestricted)]
    pub status_transitions: TransitionPolicy,
}

impl CheckoutConfig {
    #[must_use]
    pub fn settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            stock_policy: self.stock_policy,
            transition_policy: self.status_transitions,
        }
    }
}
