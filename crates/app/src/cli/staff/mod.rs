use clap::{Args, Subcommand};

mod issue_token;
mod list;
mod rotate;

#[derive(Debug, Args)]
pub(crate) struct StaffCommand {
    #[command(subcommand)]
    command: StaffSubcommand,
}

#[derive(Debug, Subcommand)]
enum StaffSubcommand {
    /// Create a staff member and print their bearer token
    IssueToken(issue_token::IssueTokenArgs),
    List(list::ListStaffArgs),
    /// Replace a staff member's bearer token
    Rotate(rotate::RotateTokenArgs),
}

pub(crate) async fn run(command: StaffCommand) -> Result<(), String> {
    match command.command {
        StaffSubcommand::IssueToken(args) => issue_token::run(args).await,
        StaffSubcommand::List(args) => list::run(args).await,
        StaffSubcommand::Rotate(args) => rotate::run(args).await,
    }
}

fn print_issued(issued: &gearlock_app::domain::staff::records::IssuedStaffToken) {
    println!("staff_uuid: {}", issued.member.uuid);
    println!("name: {}", issued.member.name);
    println!("role: {}", issued.member.role);
    println!("staff_token: {}", issued.token);
    println!("store this token now; it is only shown once");
}
