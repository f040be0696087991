use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Debug,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    max_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, max_level: LogLevel) -> Self {
        Self { prefix, max_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => eprintln!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp,
                level.tag(),
                prefix,
                file_name,
                line,
                message
            ),
            None => eprintln!(
                "[{}][{}][{}:{}] {}",
                timestamp,
                level.tag(),
                file_name,
                line,
                message
            ),
        }
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, max_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, max_level));
}

/// Whether a message at `level` would be written. False until `init_logger` runs.
pub fn enabled(level: LogLevel) -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(level))
}

pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Info) {
            $crate::logger::log(
                $crate::logger::LogLevel::Info,
                file!(),
                line!(),
                &format!($($arg)*),
            )
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::LogLevel::Debug) {
            $crate::logger::log(
                $crate::logger::LogLevel::Debug,
                file!(),
                line!(),
                &format!($($arg)*),
            )
        }
    };
}
