use crate::{CliError, Result as CliResult};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Initialize the global logger.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to a file)
///
/// Stdout carries command output, so console logging goes to stderr.
#[track_caller]
pub fn initialize(
    log_level: mt_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref path) => plain().chain(open_log_file(path)?),
        None if colored => with_colors().chain(std::io::stderr()),
        None => plain().chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

#[track_caller]
fn open_log_file(path: &Path) -> CliResult<std::fs::File> {
    fern::log_file(path).map_err(|e| {
        CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
    })
}

fn plain() -> Dispatch {
    Dispatch::new().format(|out, message, record| write_line(out, message, record, record.level()))
}

fn with_colors() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new().format(move |out, message, record| {
        write_line(out, message, record, colors.color(record.level()))
    })
}

/// `[date - level] message [file:line]`
fn write_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    level: impl fmt::Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
