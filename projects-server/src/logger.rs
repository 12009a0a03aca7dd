//! Logging setup.
//!
//! One fern dispatch, one line layout. Color applies only to stdout
//! output; a log file always receives plain text.

use crate::error::{Result as ServerResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use projects_config::LogLevel;

/// Wire up the global logger. Output goes to `log_file` when given and to
/// stdout otherwise; `colored` is ignored for file output.
pub fn initialize(level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> ServerResult<()> {
    let use_color = colored && log_file.is_none();
    let palette = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let dispatch = Dispatch::new()
        .level(*level)
        .format(move |out, message, record| {
            let when = humantime::format_rfc3339(SystemTime::now());
            let origin = format!(
                "{}:{}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0)
            );
            if use_color {
                out.finish(format_args!(
                    "{when} {} [{origin}] {message}",
                    palette.color(record.level())
                ));
            } else {
                out.finish(format_args!(
                    "{when} {} [{origin}] {message}",
                    record.level()
                ));
            }
        });

    let dispatch = match &log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {e}", path.display()),
                })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(path) => info!("Logging at {:?} to {}", *level, path.display()),
        None => info!("Logging at {:?} to stdout", *level),
    }

    Ok(())
}
