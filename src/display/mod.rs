//! Display formatting for terminal output
//!
//! Formats budget configurations, classes and server settings as plain
//! text for the CLI.

pub mod class;
pub mod server;

pub use class::{format_class_table, format_config_summary, format_sync_report};
pub use server::format_server_config;
