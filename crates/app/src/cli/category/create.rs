use clap::Args;
use gearlock_app::domain::categories::{
    CategoriesService, PgCategoriesService, data::NewCategory, records::CategoryUuid,
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateCategoryArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    name: String,

    /// Parent category UUID
    #[arg(long)]
    parent: Option<Uuid>,

    #[arg(long, default_value = "")]
    description: String,

    /// Sort key among siblings, lowest first
    #[arg(long, default_value_t = 0)]
    position: i32,
}

pub(crate) async fn run(args: CreateCategoryArgs) -> Result<(), String> {
    let service = PgCategoriesService::new(args.database.connect().await?);

    let category = service
        .create_category(NewCategory {
            name: args.name,
            parent: args.parent.map(CategoryUuid::from_uuid),
            description: args.description,
            position: args.position,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    println!("category_uuid: {}", category.uuid);
    println!("slug: {}", category.slug);

    Ok(())
}
