use clap::{Args, Subcommand};

mod create;
mod list;
mod stock;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to the catalog
    Create(create::CreateProductArgs),
    /// List catalog products
    List(list::ListProductsArgs),
    /// Set a product's stock level
    Stock(stock::SetStockArgs),
}

pub(crate) async fn run(command: ProductCommand) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Create(args) => create::run(args).await,
        ProductSubcommand::List(args) => list::run(args).await,
        ProductSubcommand::Stock(args) => stock::run(args).await,
    }
}
