use clap::Args;
use gearlock::orders::OrderStatus;
use gearlock_app::domain::orders::{
    OrdersService, PgOrdersService,
    data::{CheckoutSettings, OrderFilter},
};
use jiff::Timestamp;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListOrdersArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    status: Option<OrderStatus>,

    /// Placed at or after this time (RFC 3339)
    #[arg(long)]
    from: Option<Timestamp>,

    /// Placed before this time (RFC 3339)
    #[arg(long)]
    to: Option<Timestamp>,
}

pub(crate) async fn run(args: ListOrdersArgs) -> Result<(), String> {
    let service = PgOrdersService::new(args.database.connect().await?, CheckoutSettings::default());

    let orders = service
        .list_orders(OrderFilter {
            status: args.status,
            created_from: args.from,
            created_to: args.to,
        })
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    for order in orders {
        println!(
            "{}  {}  {:<10}  {:>10}  {} ({} lines)",
            order.uuid,
            order.created_at,
            order.status.as_str(),
            order.total_price,
            order.buyer.full_name(),
            order.lines.len()
        );
    }

    Ok(())
}
