//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the config and storage layers.

pub mod budget;
pub mod server;

pub use budget::{handle_budget_command, BudgetCommands};
pub use server::handle_server_command;
