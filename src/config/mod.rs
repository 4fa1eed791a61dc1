//! Configuration module for sbudget
//!
//! Two independent JSON configuration files are loaded here:
//! - the budget configuration, which declares the budget classes and where
//!   they are saved
//! - the server configuration, runtime settings for the HTTP front end

pub mod budget;
mod schema;
pub mod server;

pub use budget::Config;
pub use server::ServerConfig;
