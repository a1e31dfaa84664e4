use clap::{Args, Parser, Subcommand};
use gearlock_app::database::{self, Db};

mod brand;
mod category;
mod db;
mod order;
mod product;
mod staff;

#[derive(Debug, Parser)]
#[command(name = "gearlock-app", about = "Gearlock storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Product(product::ProductCommand),
    Category(category::CategoryCommand),
    Brand(brand::BrandCommand),
    Staff(staff::StaffCommand),
    Order(order::OrderCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Product(command) => product::run(command).await,
            Commands::Category(command) => category::run(command).await,
            Commands::Brand(command) => brand::run(command).await,
            Commands::Staff(command) => staff::run(command).await,
            Commands::Order(command) => order::run(command).await,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        database::connect(&self.database_url)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}
