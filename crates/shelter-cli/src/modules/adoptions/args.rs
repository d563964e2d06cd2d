use clap::{Args, Subcommand};

use crate::modules::system::args::PageArgs;

#[derive(Args)]
pub struct AdoptionArgs {
    #[command(subcommand)]
    pub command: AdoptionCommand,
}

#[derive(Subcommand)]
pub enum AdoptionCommand {
    List(AdoptionListArgs),
    Get(AdoptionIdArgs),
}

#[derive(Args)]
pub struct AdoptionListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct AdoptionIdArgs {
    pub id: i64,
}
