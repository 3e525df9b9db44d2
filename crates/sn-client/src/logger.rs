use crate::ClientResult;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;
use sn_config::{ConfigError, LogLevel};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
///
/// Stdout is left for command output.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ClientResult<()> {
    let level_filter = *log_level;

    let dispatch = if let Some(ref log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| ConfigError::Io {
                path: log_path.clone(),
                source: e,
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(io::stderr())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0),
                ))
            })
            .chain(io::stderr())
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| ConfigError::config(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={level_filter:?}, file={}",
            path.display()
        ),
        None => debug!("Logger initialized: level={level_filter:?}, stderr"),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
