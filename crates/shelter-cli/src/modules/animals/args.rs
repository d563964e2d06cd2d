use clap::{Args, Subcommand};
use shelter_core::Status;

use crate::modules::system::args::PageArgs;

#[derive(Args)]
pub struct AnimalArgs {
    #[command(subcommand)]
    pub command: AnimalCommand,
}

#[derive(Subcommand)]
pub enum AnimalCommand {
    List(AnimalListArgs),
    Get(AnimalIdArgs),
    Create(AnimalCreateArgs),
    Update(AnimalUpdateArgs),
    Delete(AnimalIdArgs),
}

#[derive(Args)]
pub struct AnimalListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
    #[arg(long)]
    pub status: Option<Status>,
    #[arg(long)]
    pub active: Option<bool>,
    #[arg(long, help = "Only animals with every vaccination required for adoption")]
    pub vaccinated: Option<bool>,
    #[arg(long)]
    pub sex: Option<String>,
    #[arg(long)]
    pub min_age: Option<u32>,
    #[arg(long)]
    pub max_age: Option<u32>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct AnimalIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct AnimalFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub species_id: i64,
    #[arg(long)]
    pub breed_id: Option<i64>,
    #[arg(long)]
    pub sex: String,
    #[arg(long, help = "YYYY-MM-DD")]
    pub birth_date: Option<String>,
    #[arg(long, help = "YYYY-MM-DD")]
    pub intake_date: Option<String>,
    #[arg(long, default_value = "AVAILABLE")]
    pub status: Status,
    #[arg(long, default_value_t = 0)]
    pub price: i64,
    #[arg(long)]
    pub active: Option<bool>,
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Args)]
pub struct AnimalCreateArgs {
    #[command(flatten)]
    pub fields: AnimalFields,
}

#[derive(Args)]
pub struct AnimalUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub fields: AnimalFields,
}
