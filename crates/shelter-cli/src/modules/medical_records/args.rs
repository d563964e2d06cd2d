use chrono::NaiveDate;
use clap::{Args, Subcommand};
use shelter_core::{MedicalRecordSortField, SortDirection, Status};

use crate::modules::system::args::PageArgs;

#[derive(Args)]
pub struct MedicalRecordArgs {
    #[command(subcommand)]
    pub command: MedicalRecordCommand,
}

#[derive(Subcommand)]
pub enum MedicalRecordCommand {
    List(MedicalRecordListArgs),
    Get(MedicalRecordIdArgs),
    #[command(about = "List the records of one animal")]
    ForAnimal(MedicalRecordForAnimalArgs),
    Create(MedicalRecordFields),
    Update(MedicalRecordUpdateArgs),
    Delete(MedicalRecordIdArgs),
}

#[derive(Args)]
pub struct MedicalRecordListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
    #[arg(long)]
    pub animal_status: Option<Status>,
    #[arg(long, help = "First day to include (YYYY-MM-DD)")]
    pub from: Option<NaiveDate>,
    #[arg(long, help = "Last day to include (YYYY-MM-DD)")]
    pub to: Option<NaiveDate>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct MedicalRecordIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct MedicalRecordForAnimalArgs {
    pub animal_id: i64,
    #[arg(long, help = "Match diagnosis, treatment or animal name")]
    pub search: Option<String>,
    #[arg(long)]
    pub from: Option<NaiveDate>,
    #[arg(long)]
    pub to: Option<NaiveDate>,
    #[arg(long, default_value = "date")]
    pub sort: MedicalRecordSortField,
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,
}

#[derive(Args)]
pub struct MedicalRecordFields {
    #[arg(long)]
    pub animal_id: i64,
    #[arg(long)]
    pub veterinarian_id: i64,
    #[arg(long, help = "YYYY-MM-DD")]
    pub date: NaiveDate,
    #[arg(long)]
    pub diagnosis: String,
    #[arg(long)]
    pub treatment: String,
    #[arg(long, default_value_t = 0)]
    pub cost: i64,
}

#[derive(Args)]
pub struct MedicalRecordUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: MedicalRecordFields,
}
