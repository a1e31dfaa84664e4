use clap::Args;
use gearlock_app::domain::products::{PgProductsService, ProductsService, records::ProductUuid};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SetStockArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    uuid: ProductUuid,

    /// New number of units in stock
    #[arg(long)]
    quantity: u32,
}

pub(crate) async fn run(args: SetStockArgs) -> Result<(), String> {
    let service = PgProductsService::new(args.database.connect().await?);

    let product = service
        .set_quantity(args.uuid, args.quantity)
        .await
        .map_err(|error| format!("failed to update stock: {error}"))?;

    println!("{}: {} in stock", product.name, product.quantity);

    Ok(())
}
