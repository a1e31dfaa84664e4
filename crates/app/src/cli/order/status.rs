use clap::Args;
use gearlock::orders::TransitionPolicy;
use gearlock_app::domain::orders::{
    OrdersService, PgOrdersService,
    data::CheckoutSettings,
    records::OrderUuid,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ChangeStatusArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    uuid: OrderUuid,

    /// Requested status: new, processing, shipped, delivered or cancelled
    #[arg(long)]
    status: String,

    /// Which moves are allowed: unrestricted or forward-only
    #[arg(long, env = "STATUS_TRANSITIONS", default_value_t = TransitionPolicy::Unrestricted)]
    transition_policy: TransitionPolicy,
}

pub(crate) async fn run(args: ChangeStatusArgs) -> Result<(), String> {
    let settings = CheckoutSettings {
        transition_policy: args.transition_policy,
        ..CheckoutSettings::default()
    };

    let service = PgOrdersService::new(args.database.connect().await?, settings);

    let order = service
        .change_status(args.uuid, args.status.clone())
        .await
        .map_err(|error| format!("failed to change order status: {error}"))?;

    if order.status.as_str() == args.status.trim() {
        println!("order {} is {}", order.uuid, order.status);
    } else {
        println!(
            "order {} stays {}; \"{}\" was ignored",
            order.uuid, order.status, args.status
        );
    }

    Ok(())
}
