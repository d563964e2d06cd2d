use chrono::NaiveDate;
use clap::{Args, Subcommand};
use shelter_core::{SortDirection, Status, VaccinationSortField};

use crate::modules::system::args::PageArgs;

#[derive(Args)]
pub struct VaccinationArgs {
    #[command(subcommand)]
    pub command: VaccinationCommand,
}

#[derive(Subcommand)]
pub enum VaccinationCommand {
    List(VaccinationListArgs),
    Get(VaccinationIdArgs),
    Create(VaccinationFields),
    Update(VaccinationUpdateArgs),
    Delete(VaccinationIdArgs),
    #[command(about = "Manage vaccine types")]
    Types(VaccinationTypeArgs),
}

#[derive(Args)]
pub struct VaccinationListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
    #[arg(long)]
    pub animal_status: Option<Status>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, help = "Keep only doses due on or before this day (YYYY-MM-DD)")]
    pub due_before: Option<NaiveDate>,
    #[arg(long, help = "Re-sort the fetched page locally")]
    pub sort: Option<VaccinationSortField>,
    #[arg(long, default_value = "desc")]
    pub sort_direction: SortDirection,
}

#[derive(Args)]
pub struct VaccinationIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct VaccinationFields {
    #[arg(long)]
    pub animal_id: i64,
    #[arg(long)]
    pub veterinarian_id: i64,
    #[arg(long)]
    pub type_id: i64,
    #[arg(long, help = "YYYY-MM-DD")]
    pub date: NaiveDate,
    #[arg(long, help = "YYYY-MM-DD")]
    pub next_due: Option<NaiveDate>,
}

#[derive(Args)]
pub struct VaccinationUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: VaccinationFields,
}

#[derive(Args)]
pub struct VaccinationTypeArgs {
    #[command(subcommand)]
    pub command: VaccinationTypeCommand,
}

#[derive(Subcommand)]
pub enum VaccinationTypeCommand {
    List(VaccinationTypeListArgs),
    Get(VaccinationIdArgs),
    Create(VaccinationTypeCreateArgs),
    Update(VaccinationTypeUpdateArgs),
    Delete(VaccinationIdArgs),
}

#[derive(Args)]
pub struct VaccinationTypeListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
    #[arg(long)]
    pub required: Option<bool>,
    #[arg(long, help = "Match vaccine name or description")]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct VaccinationTypeCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub duration_months: i32,
    #[arg(long, help = "Required before an animal can be adopted")]
    pub required: bool,
}

#[derive(Args)]
pub struct VaccinationTypeUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: VaccinationTypeCreateArgs,
}
