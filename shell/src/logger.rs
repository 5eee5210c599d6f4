use crate::error::{Result as ShellErrorResult, ShellError};

use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Where a shell invocation sends its log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file under the configured log directory
    File(PathBuf),
    /// Console on stderr, level names colored
    ColoredStderr,
    /// Console on stderr, plain text (piped or redirected)
    PlainStderr,
}

impl LogTarget {
    /// A configured log file wins over the console; `colored` only applies to stderr.
    pub fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if colored => Self::ColoredStderr,
            None => Self::PlainStderr,
        }
    }
}

/// Installs the global fern logger for this invocation.
///
/// stdout is reserved for command JSON, so console logging goes to stderr.
#[track_caller]
pub fn initialize(
    log_level: vh_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ShellErrorResult<()> {
    let level_filter = log_level.0;
    let target = LogTarget::select(log_file, colored);

    let output = match target {
        LogTarget::File(ref path) => {
            Dispatch::new().format(plain_line).chain(open_log_file(path)?)
        }
        LogTarget::ColoredStderr => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stderr())
        }
        LogTarget::PlainStderr => Dispatch::new().format(plain_line).chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(output)
        .apply()
        .map_err(|e| ShellError::logger(format!("Failed to initialize logger: {e}")))?;

    match target {
        LogTarget::File(path) => info!(
            "vh-shell logging at {level_filter:?} to {}",
            path.display()
        ),
        _ => info!("vh-shell logging at {level_filter:?} to stderr"),
    }

    Ok(())
}

#[track_caller]
fn open_log_file(path: &Path) -> ShellErrorResult<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| {
            ShellError::logger(format!("Failed to create log directory {}: {e}", dir.display()))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ShellError::logger(format!("Failed to open log file {}: {e}", path.display())))
}

fn plain_line(out: FormatCallback, message: &std::fmt::Arguments, record: &Record) {
    write_line(out, message, record, record.level())
}

/// `[<rfc3339> - <level>] <message> [<file>:<line>]`
fn write_line(
    out: FormatCallback,
    message: &std::fmt::Arguments,
    record: &Record,
    level: impl Display,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
