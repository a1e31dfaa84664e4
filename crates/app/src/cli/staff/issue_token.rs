use clap::Args;
use gearlock::roles::Role;
use gearlock_app::domain::staff::{PgStaffService, StaffService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Staff member display name
    #[arg(long)]
    name: String,

    /// One of: manager, content_manager, admin
    #[arg(long)]
    role: Role,
}

pub(crate) async fn run(args: IssueTokenArgs) -> Result<(), String> {
    let service = PgStaffService::new(args.database.connect().await?);

    let issued = service
        .issue_token(args.name, args.role)
        .await
        .map_err(|error| format!("failed to create staff member: {error}"))?;

    super::print_issued(&issued);

    Ok(())
}
