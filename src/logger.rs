use std::sync::atomic::{AtomicU8, Ordering};

/// Severity, ordered from most to least important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}

static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);

/// Simple leveled logger for votemarket-db.
///
/// Everything goes to stderr: stdout carries only the success sentinel
/// (or the rendered document on a dry run).
pub struct Logger;

impl Logger {
    pub fn init(level: LogLevel) {
        MAX_LEVEL.store(level as u8, Ordering::Relaxed);
    }

    pub fn level() -> LogLevel {
        LogLevel::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
    }

    pub fn enabled(level: LogLevel) -> bool {
        level <= Self::level()
    }

    pub fn info(msg: &str) {
        Self::log(LogLevel::Info, "INFO", msg);
    }

    pub fn debug(msg: &str) {
        Self::log(LogLevel::Debug, "DEBUG", msg);
    }

    pub fn warn(msg: &str) {
        Self::log(LogLevel::Warn, "WARN", msg);
    }

    fn log(level: LogLevel, tag: &str, msg: &str) {
        if Self::enabled(level) {
            eprintln!("[{}] {}", tag, msg);
        }
    }
}
