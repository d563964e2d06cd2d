use clap::{Args, Subcommand};
use shelter_core::{PageQuery, SortDirection};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Create or update a context")]
    SetContext(SetContextArgs),
    #[command(about = "Set the active context")]
    UseContext(UseContextArgs),
    #[command(about = "Print the active context name")]
    CurrentContext,
    #[command(about = "List known context names")]
    GetContexts,
    #[command(about = "Remove a context and its stored session")]
    DeleteContext(DeleteContextArgs),
}

#[derive(Args)]
pub struct SetContextArgs {
    #[arg(help = "Context name")]
    pub name: String,
    #[arg(long, help = "Server base URL")]
    pub addr: Option<String>,
}

#[derive(Args)]
pub struct UseContextArgs {
    pub name: String,
}

#[derive(Args)]
pub struct DeleteContextArgs {
    pub name: String,
}

/// Paging flags shared by every list command.
#[derive(Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    #[arg(long)]
    pub size: Option<u32>,
    #[arg(long)]
    pub sort_by: Option<String>,
    #[arg(long, help = "asc or desc")]
    pub direction: Option<SortDirection>,
}

impl PageArgs {
    /// Overlays the flags on an endpoint's defaults.
    pub fn into_query(self, defaults: PageQuery) -> PageQuery {
        PageQuery {
            page: self.page,
            size: self.size.unwrap_or(defaults.size),
            sort_by: self.sort_by.unwrap_or(defaults.sort_by),
            sort_direction: self.direction.unwrap_or(defaults.sort_direction),
        }
    }
}
