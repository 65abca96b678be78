use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "se")]
#[command(about = "Scope-embed CLI: list scopes, fetch guest credentials, drive view switches")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to the configured bind address)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
