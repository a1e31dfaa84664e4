use clap::Args;
use gearlock_app::domain::categories::{CategoriesService, PgCategoriesService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListCategoriesArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListCategoriesArgs) -> Result<(), String> {
    let service = PgCategoriesService::new(args.database.connect().await?);

    let categories = service
        .list_categories()
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    if categories.is_empty() {
        println!("no categories found");
        return Ok(());
    }

    for category in categories {
        let parent = category
            .parent_uuid
            .map_or_else(|| "-".to_string(), |parent| parent.to_string());

        println!(
            "{}  {:<30}  {:<30}  parent {parent}",
            category.uuid, category.name, category.slug
        );
    }

    Ok(())
}
