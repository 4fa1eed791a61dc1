use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sbudget::cli::{handle_budget_command, handle_server_command, BudgetCommands};

#[derive(Parser)]
#[command(
    name = "sbudget",
    version,
    about = "Validate budget configuration and persist budget classes",
    long_about = "sbudget reads a budget configuration declaring income and expense \
                  classes, validates it, and writes each class to its own JSON file \
                  in the configured save location."
)]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Budget(BudgetCommands),

    /// Validate a server configuration file and show its settings
    Server {
        /// Path to the server configuration file
        config: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Budget(cmd) => handle_budget_command(cmd)?,
        Commands::Server { config } => handle_server_command(&config)?,
    }

    Ok(())
}
