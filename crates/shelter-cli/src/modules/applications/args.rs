use clap::{Args, Subcommand};
use shelter_core::{ApplicationSortField, SortDirection, Status};

use crate::modules::system::args::PageArgs;

#[derive(Args)]
pub struct ApplicationArgs {
    #[command(subcommand)]
    pub command: ApplicationCommand,
}

#[derive(Subcommand)]
pub enum ApplicationCommand {
    #[command(about = "List every application (staff)")]
    List(ApplicationListArgs),
    Get(ApplicationIdArgs),
    #[command(about = "List one applicant's applications")]
    ForUser(ApplicationForUserArgs),
    HasApplied(HasAppliedArgs),
    #[command(about = "Apply to adopt an animal")]
    Apply(ApplyArgs),
    Update(ApplicationUpdateArgs),
    Reject(RejectArgs),
    Delete(ApplicationIdArgs),
}

#[derive(Args)]
pub struct ApplicationListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ApplicationIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct ApplicationForUserArgs {
    pub user_id: i64,
    #[arg(long, help = "Match animal name, applicant name or email")]
    pub search: Option<String>,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long, default_value = "applicationDate")]
    pub sort: ApplicationSortField,
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    #[arg(long, default_value_t = 10)]
    pub size: u32,
}

#[derive(Args)]
pub struct HasAppliedArgs {
    pub user_id: i64,
    pub animal_id: i64,
}

#[derive(Args)]
pub struct ApplyArgs {
    #[arg(long)]
    pub user_id: i64,
    #[arg(long)]
    pub animal_id: i64,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct ApplicationUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: ApplyArgs,
}

#[derive(Args)]
pub struct RejectArgs {
    pub id: i64,
    #[arg(long, help = "User id of the reviewing staff member")]
    pub reviewer: i64,
}
