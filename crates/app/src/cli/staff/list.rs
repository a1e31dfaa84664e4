use clap::Args;
use gearlock_app::domain::staff::{PgStaffService, StaffService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListStaffArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListStaffArgs) -> Result<(), String> {
    let service = PgStaffService::new(args.database.connect().await?);

    let members = service
        .list_staff()
        .await
        .map_err(|error| format!("failed to list staff: {error}"))?;

    if members.is_empty() {
        println!("no staff members found");
        return Ok(());
    }

    for member in members {
        println!("staff_uuid: {}", member.uuid);
        println!("name: {}", member.name);
        println!("role: {}", member.role);
        println!("created_at: {}", member.created_at);
        println!(
            "last_seen_at: {}",
            member
                .last_seen_at
                .map_or_else(|| "never".to_string(), |seen| seen.to_string())
        );
        println!();
    }

    Ok(())
}
