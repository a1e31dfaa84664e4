use clap::Args;
use gearlock_app::domain::staff::{PgStaffService, StaffService, records::StaffUuid};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RotateTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    #[arg(long)]
    uuid: StaffUuid,
}

pub(crate) async fn run(args: RotateTokenArgs) -> Result<(), String> {
    let service = PgStaffService::new(args.database.connect().await?);

    let issued = service
        .rotate_token(args.uuid)
        .await
        .map_err(|error| format!("failed to rotate token: {error}"))?;

    super::print_issued(&issued);

    Ok(())
}
