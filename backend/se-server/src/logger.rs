use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go
#[derive(Debug, Clone)]
pub enum LogSink {
    /// Append to a file, with source locations
    File(PathBuf),
    /// Standard output; colors only make sense on a TTY
    Stdout { colored: bool },
}

impl LogSink {
    pub fn new(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None => Self::Stdout { colored },
        }
    }
}

/// Install the global `log` dispatcher for the issuer process.
///
/// Issuance events from `se_auth` and request traces from `tower_http` share
/// one stream, so every line carries its target.
pub fn initialize(log_level: se_config::LogLevel, sink: LogSink) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = match &sink {
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?;

            Dispatch::new()
                .format(|out, message, record| {
                    write_line(out, record.level(), message, record, true)
                })
                .chain(file)
        }
        LogSink::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record, true)
                })
                .chain(std::io::stdout())
        }
        // systemd and docker capture stdout without a TTY
        LogSink::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| {
                write_line(out, record.level(), message, record, false)
            })
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("tower_http", LevelFilter::Info)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &sink {
        LogSink::File(path) => info!("Logging at {level_filter} to {}", path.display()),
        LogSink::Stdout { .. } => info!("Logging at {level_filter} to stdout"),
    }

    // Dependencies that emit tracing events end up in the same stream
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn write_line(
    out: FormatCallback<'_>,
    level: impl Display,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
    with_location: bool,
) {
    let date = humantime::format_rfc3339_millis(SystemTime::now());
    if with_location {
        out.finish(format_args!(
            "[{date} {level} {target}] {message} [{file}:{line}]",
            target = record.target(),
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    } else {
        out.finish(format_args!(
            "[{date} {level} {target}] {message}",
            target = record.target(),
        ))
    }
}
