use clap::Args;
use gearlock_app::domain::brands::{BrandsService, PgBrandsService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListBrandsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListBrandsArgs) -> Result<(), String> {
    let service = PgBrandsService::new(args.database.connect().await?);

    let brands = service
        .list_brands()
        .await
        .map_err(|error| format!("failed to list brands: {error}"))?;

    if brands.is_empty() {
        println!("no brands found");
        return Ok(());
    }

    for brand in brands {
        println!("{}  {:<30}  {}", brand.uuid, brand.name, brand.slug);
    }

    Ok(())
}
