use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct BrandCommand {
    #[command(subcommand)]
    command: BrandSubcommand,
}

#[derive(Debug, Subcommand)]
enum BrandSubcommand {
    /// Add a brand
    Create(create::CreateBrandArgs),
    /// List every brand
    List(list::ListBrandsArgs),
}

pub(crate) async fn run(command: BrandCommand) -> Result<(), String> {
    match command.command {
        BrandSubcommand::Create(args) => create::run(args).await,
        BrandSubcommand::List(args) => list::run(args).await,
    }
}
