use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    /// Add a category, optionally under a parent
    Create(create::CreateCategoryArgs),
    /// List every category
    List(list::ListCategoriesArgs),
}

pub(crate) async fn run(command: CategoryCommand) -> Result<(), String> {
    match command.command {
        CategorySubcommand::Create(args) => create::run(args).await,
        CategorySubcommand::List(args) => list::run(args).await,
    }
}
