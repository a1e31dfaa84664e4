use clap::Args;
use gearlock_app::domain::brands::{BrandsService, PgBrandsService, data::NewBrand};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateBrandArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    description: String,
}

pub(crate) async fn run(args: CreateBrandArgs) -> Result<(), String> {
    let service = PgBrandsService::new(args.database.connect().await?);

    let brand = service
        .create_brand(NewBrand {
            name: args.name,
            description: args.description,
        })
        .await
        .map_err(|error| format!("failed to create brand: {error}"))?;

    println!("brand_uuid: {}", brand.uuid);
    println!("slug: {}", brand.slug);

    Ok(())
}
