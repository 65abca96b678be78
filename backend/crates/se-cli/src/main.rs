//! se - scope-embed CLI
//!
//! # Examples
//!
//! ```bash
//! # List the scope directory
//! se scopes --pretty
//!
//! # Fetch a credential for scope 101
//! se token 101 --subject alice
//!
//! # Switch 101 -> 103 -> 102 all at once; only 102 should remain mounted
//! se switch 101 103 102 --concurrent --pretty
//!
//! # Decode a credential with the configured secret
//! se verify <token>
//! ```

use se_cli::{
    Cli, CliError, CliResult, Client, Commands, ConsoleSurface, SwitchMode, drive_switches,
    resolve_scopes, server_url_from, verify_token,
};
use se_config::Config;
use se_session::{
    EmbedSettings, IframeToolkit, RemoteCredentialSource, SessionController, UiConfig,
};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command, cli.server).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, server: Option<String>) -> CliResult<Value> {
    // Missing config is fine for the HTTP-only commands
    let config = Config::load()?;
    let server_url = server.unwrap_or_else(|| server_url_from(&config));
    let client = Client::new(&server_url);

    match command {
        Commands::Scopes => Ok(client.list_scopes().await?),
        Commands::Token { scope_id, subject } => {
            Ok(client.guest_token(&scope_id, subject.as_deref()).await?)
        }
        Commands::Switch {
            scope_ids,
            concurrent,
            remount_delay_ms,
        } => {
            if config.embed.resource_ref.trim().is_empty() {
                return Err(CliError::Usage {
                    message: "embed.resource_ref must be set (SE_EMBED_RESOURCE_REF) to mount views"
                        .to_string(),
                });
            }

            let scopes = resolve_scopes(&client, &scope_ids).await?;
            let delay = remount_delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.session.remount_delay());
            let settings = EmbedSettings::new(&config.embed.engine_url, &config.embed.resource_ref)
                .with_ui(UiConfig {
                    hide_title: config.embed.hide_title,
                    hide_tab: config.embed.hide_tab,
                    hide_chart_controls: config.embed.hide_chart_controls,
                })
                .with_remount_delay(delay);

            let controller = SessionController::new(
                Arc::new(RemoteCredentialSource::new(&server_url)),
                Arc::new(IframeToolkit::new()),
                Arc::new(ConsoleSurface::new()),
                settings,
            );

            let mode = if concurrent {
                SwitchMode::Concurrent
            } else {
                SwitchMode::Sequential
            };
            let report = drive_switches(&controller, scopes, mode).await;
            controller.teardown().await;

            serde_json::to_value(report).map_err(|e| CliError::Usage {
                message: format!("Failed to encode report: {e}"),
            })
        }
        Commands::Verify { token } => verify_token(&config, &token),
    }
}
