// logging crate

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Mutex;

static ENTRIES: Lazy<Mutex<Vec<LogEntry>>> = Lazy::new(|| Mutex::new(Vec::new()));

// Minimum level echoed to the console; everything is stored regardless
static CONSOLE_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Warning));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `--debug` wins over `--verbose`; with neither only problems are shown.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            LogLevel::Debug
        } else if verbose {
            LogLevel::Info
        } else {
            LogLevel::Warning
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "🔍",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub at: DateTime<Local>,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.at.format("%H:%M:%S"),
            self.level.prefix(),
            self.message
        )
    }
}

pub fn set_console_level(level: LogLevel) {
    if let Ok(mut current) = CONSOLE_LEVEL.lock() {
        *current = level;
    }
}

fn console_level() -> LogLevel {
    CONSOLE_LEVEL
        .lock()
        .map(|level| *level)
        .unwrap_or(LogLevel::Warning)
}

pub fn log(level: LogLevel, message: &str) {
    let entry = LogEntry {
        level,
        at: Local::now(),
        message: message.to_string(),
    };

    if level >= console_level() {
        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", entry),
            _ => println!("{}", entry),
        }
    }

    if let Ok(mut entries) = ENTRIES.lock() {
        entries.push(entry);
    }
}

/// Stored entries whose message contains `needle`, oldest first.
pub fn entries_containing(needle: &str) -> Vec<LogEntry> {
    ENTRIES
        .lock()
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry.message.contains(needle))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warning(message: &str) {
    log(LogLevel::Warning, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
