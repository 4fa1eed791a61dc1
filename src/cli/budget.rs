//! Budget configuration CLI commands
//!
//! Validate a budget configuration, list its classes, and write the
//! classes out to the configured save location.

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;
use crate::display::{format_class_table, format_config_summary, format_sync_report};
use crate::error::SbResult;
use crate::models::{BudgetClass, BudgetClassType};
use crate::storage::ClassStore;

/// Budget configuration subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Validate a budget configuration file
    Check {
        /// Path to the budget configuration file
        config: PathBuf,
    },

    /// List the budget classes a configuration declares
    Classes {
        /// Path to the budget configuration file
        config: PathBuf,
        /// Only show classes of this type (income or expense)
        #[arg(short = 't', long = "type")]
        class_type: Option<BudgetClassType>,
    },

    /// Write class files for every class into the save location
    Sync {
        /// Path to the budget configuration file
        config: PathBuf,
        /// Rewrite class files that already exist
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(cmd: BudgetCommands) -> SbResult<()> {
    match cmd {
        BudgetCommands::Check { config } => {
            let config = Config::parse(&config)?;
            print!("{}", format_config_summary(&config));
            println!("Configuration OK.");
        }

        BudgetCommands::Classes { config, class_type } => {
            let config = Config::parse(&config)?;
            let classes: Vec<BudgetClass> = match class_type {
                Some(t) => config.classes_of_type(t).cloned().collect(),
                None => config.into_classes(),
            };
            println!("{}", format_class_table(&classes).trim_end());
        }

        BudgetCommands::Sync { config, force } => {
            let config = Config::parse(&config)?;
            let store = ClassStore::open(config.save_location())?;

            if force {
                store.write_all(config.classes())?;
                println!(
                    "Wrote {} class file(s) to {}",
                    config.classes().len(),
                    store.dir().display()
                );
            } else {
                let report = store.sync(config.classes())?;
                println!("Syncing classes to {}", store.dir().display());
                print!("{}", format_sync_report(&report));
            }
        }
    }

    Ok(())
}
