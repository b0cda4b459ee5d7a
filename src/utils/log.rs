//! Leveled, timestamped log lines on stderr.
//!
//! Used through the crate-level `log_info!` / `log_error!` macros.

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

/// Format one log line: `2026-01-31 14:02:11,482 - INFO - message`.
pub fn format_line(timestamp: chrono::DateTime<chrono::Local>, level: Level, message: &str) -> String {
    format!(
        "{} - {} - {}",
        timestamp.format("%Y-%m-%d %H:%M:%S,%3f"),
        level.as_str(),
        message
    )
}

pub fn emit(level: Level, args: fmt::Arguments<'_>) {
    let line = format_line(chrono::Local::now(), level, &args.to_string());
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    // Broken stderr is not worth aborting a batch over.
    let _ = writeln!(handle, "{}", line);
}
