//! Server configuration CLI command

use std::path::Path;

use crate::config::ServerConfig;
use crate::display::format_server_config;
use crate::error::SbResult;

/// Validate a server configuration file and print its resolved settings
pub fn handle_server_command(path: &Path) -> SbResult<()> {
    let config = ServerConfig::load(path)?;
    print!("{}", format_server_config(&config));
    Ok(())
}
