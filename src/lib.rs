//! sbudget - budget class configuration and storage
//!
//! This library loads the budget configuration that declares a set of named
//! budget classes (income and expense categories with matching keywords),
//! validates it against the required schema, and persists every class as
//! its own JSON document in the configured save directory. A separate,
//! independently validated server configuration describes the runtime
//! settings of the HTTP front end.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Budget and server configuration loading
//! - `error`: Custom error types
//! - `models`: Budget class data model
//! - `storage`: Per-class JSON files with atomic writes
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Command handlers for the `sbudget` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use sbudget::config::Config;
//! use sbudget::storage::ClassStore;
//!
//! let config = Config::parse("budget.json")?;
//! let store = ClassStore::open(config.save_location())?;
//! store.sync(config.classes())?;
//! # Ok::<(), sbudget::SbError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{SbError, SbResult};
