//! se-cli library
//!
//! Exports the HTTP client and the scope-switch driver for use in tests.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod console_surface;
pub(crate) mod error;
pub(crate) mod server_url;
pub(crate) mod switch_driver;
pub(crate) mod verify;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use console_surface::ConsoleSurface;
pub use error::{CliError, Result as CliResult};
pub use server_url::server_url_from;
pub use switch_driver::{SwitchMode, SwitchRecord, SwitchReport, drive_switches, resolve_scopes};
pub use verify::verify_token;

/// Used when neither `--server` nor a config file says otherwise
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";
