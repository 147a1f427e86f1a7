//! Logging infrastructure for quire.
//!
//! Provides a simple, thread-safe logging system with optional file output
//! and in-memory log storage. Logging before [`init`] goes to an in-memory
//! logger with default settings, so library code can log unconditionally.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Entries kept in memory before [`init`] is called
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    /// Message level
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Global logger state
#[derive(Debug)]
struct Logger {
    /// Recent messages (last N)
    entries: VecDeque<LogEntry>,
    /// Maximum number of entries in log
    max_entries: usize,
    /// Minimum log level to record
    min_level: LogLevel,
    /// Log file path
    file_path: Option<PathBuf>,
}

impl Logger {
    /// In-memory logger used until `init` is called
    fn in_memory() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: DEFAULT_MAX_ENTRIES,
            min_level: LogLevel::Debug,
            file_path: None,
        }
    }

    /// Apply settings from `init`
    fn configure(&mut self, file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) {
        if let Some(path) = &file_path {
            // Create parent directory if it doesn't exist
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Clear log file on startup
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== Quire Log Start ===");
            }
        }

        self.file_path = file_path;
        self.max_entries = max_entries;
        self.min_level = min_level;
        self.trim();
    }

    /// Add entry to log
    fn add_entry(&mut self, level: LogLevel, message: String) {
        // Filter by minimum level
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();

        // Write to file (create if deleted)
        if let Some(path) = &self.file_path {
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
            }
        }

        self.entries.push_back(LogEntry {
            timestamp,
            level,
            message,
        });
        self.trim();
    }

    fn trim(&mut self) {
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// Get all log entries
    fn get_entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Set minimum log level
    fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Get or lazily create the global logger instance
fn get_logger() -> &'static Mutex<Logger> {
    LOGGER.get_or_init(|| Mutex::new(Logger::in_memory()))
}

/// Initialize the global logger
///
/// Call once at application startup. Entries recorded before this call are
/// kept (subject to the new `max_entries` limit).
///
/// # Arguments
///
/// * `file_path` - Path to the log file, `None` for memory-only logging
/// * `max_entries` - Maximum number of log entries to keep in memory
/// * `min_level` - Minimum log level to record (Debug, Info, Warn, Error)
pub fn init(file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) {
    if let Ok(mut logger) = get_logger().lock() {
        logger.configure(file_path, max_entries, min_level);
    }
}

/// Set minimum log level dynamically
pub fn set_min_level(level: LogLevel) {
    if let Ok(mut logger) = get_logger().lock() {
        logger.set_min_level(level);
    }
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message);
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

/// Log a message at `level`
pub fn log(level: LogLevel, message: impl Into<String>) {
    if let Ok(mut logger) = get_logger().lock() {
        logger.add_entry(level, message.into());
    }
}

/// Get all log entries
///
/// Returns a vector of all log entries currently stored in memory.
pub fn get_entries() -> Vec<LogEntry> {
    if let Ok(logger) = get_logger().lock() {
        logger.get_entries()
    } else {
        Vec::new()
    }
}

/// Whether any stored entry at `level` contains `needle`
pub fn contains(level: LogLevel, needle: &str) -> bool {
    get_entries()
        .iter()
        .any(|entry| entry.level == level && entry.message.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Error".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_logging_without_init() {
        error("logger-test: uninitialized write");
        assert!(contains(LogLevel::Error, "logger-test: uninitialized write"));
    }

    #[test]
    fn test_min_level_filters_entries() {
        let mut logger = Logger::in_memory();
        logger.set_min_level(LogLevel::Warn);
        logger.add_entry(LogLevel::Info, "dropped".to_string());
        logger.add_entry(LogLevel::Error, "kept".to_string());

        let entries = logger.get_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn test_ring_keeps_last_entries() {
        let mut logger = Logger::in_memory();
        logger.configure(None, 2, LogLevel::Debug);
        for i in 0..5 {
            logger.add_entry(LogLevel::Info, format!("message {}", i));
        }

        let messages: Vec<String> = logger.get_entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["message 3", "message 4"]);
    }

    #[test]
    fn test_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("quire.log");

        let mut logger = Logger::in_memory();
        logger.configure(Some(path.clone()), 10, LogLevel::Info);
        logger.add_entry(LogLevel::Warn, "written to disk".to_string());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("=== Quire Log Start ==="));
        assert!(content.contains("WARN: written to disk"));
    }
}
