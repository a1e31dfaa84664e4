use clap::{Args, Subcommand};

mod list;
mod status;

#[derive(Debug, Args)]
pub(crate) struct OrderCommand {
    #[command(subcommand)]
    command: OrderSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrderSubcommand {
    List(list::ListOrdersArgs),
    /// Move an order to another status
    Status(status::ChangeStatusArgs),
}

pub(crate) async fn run(command: OrderCommand) -> Result<(), String> {
    match command.command {
        OrderSubcommand::List(args) => list::run(args).await,
        OrderSubcommand::Status(args) => status::run(args).await,
    }
}
