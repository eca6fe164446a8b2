mod cli;
mod commands;
mod error;
mod util;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::from_iter(wild::args_os());

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info(args) => commands::info(args)?,
        Commands::Target(args) => commands::target(args)?,
    };

    Ok(())
}
