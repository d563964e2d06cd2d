use clap::Parser;
use std::io::{self, Write};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::CliSession;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, resolve_addr, save_config,
    CommandContext,
};
use tracing_subscriber::EnvFilter;

pub(crate) const DEFAULT_ADDR: &str = "https://127.0.0.1:8080";
pub(crate) const DEFAULT_CONTEXT: &str = "default";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut config = load_config()?;

    match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
        }
        command => {
            let context_name = cli
                .context
                .clone()
                .or_else(|| config.current_context.clone())
                .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());
            let addr = resolve_addr(cli.addr.clone(), &context_name, &config);
            ensure_secure_addr(&addr, cli.insecure)?;

            let session = CliSession::open(&addr, &context_name, cli.token.clone(), cli.insecure)?;
            let mut ctx = CommandContext {
                client: session.client(),
                addr: &addr,
                context_name: context_name.clone(),
                config: &mut config,
            };
            let result = handle_command(command, &mut ctx).await;
            session.finish(ctx.config)?;
            save_config(&config)?;
            result?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
