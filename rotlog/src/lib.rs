//! # rotlog
//!
//! Логгер с уровнями и временными метками: пишет в поток (stderr, stdout,
//! любой `Write`) или в файл. Файловый логгер умеет по достижении порога
//! в байтах переходить на новый файл (`app.log` -> `app.log.0` -> ...)
//! или обрезать текущий.

use once_cell::sync::Lazy;
use std::fmt;
use std::path::Path;
use std::sync::Mutex;

mod config;
mod error;
mod file;
mod format;
mod level;
mod logger;
mod policy;
mod target;

pub use config::{Config, OpenMode};
pub use error::{Error, Result};
pub use file::{next_rotation_path, FileHandle};
pub use format::{render_line, render_prefix, timestamp};
pub use level::Level;
pub use logger::Logger;
pub use policy::{Action, ByteCounter, Policy, PolicyEngine};
pub use target::{Sink, Target};

// ===== Макросы =====

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit($crate::Level::Debug, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit($crate::Level::Notice, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit($crate::Level::Info, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit($crate::Level::Warning, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit($crate::Level::Error, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emit($crate::Level::Fatal, std::format_args!($($arg)*))
    };
}

// ===== Глобальные макросы =====

#[macro_export]
macro_rules! gdebug {
    ($($arg:tt)*) => {
        $crate::global_emit($crate::Level::Debug, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! gnotice {
    ($($arg:tt)*) => {
        $crate::global_emit($crate::Level::Notice, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! ginfo {
    ($($arg:tt)*) => {
        $crate::global_emit($crate::Level::Info, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! gwarning {
    ($($arg:tt)*) => {
        $crate::global_emit($crate::Level::Warning, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! gerror {
    ($($arg:tt)*) => {
        $crate::global_emit($crate::Level::Error, std::format_args!($($arg)*))
    };
}
#[macro_export]
macro_rules! gfatal {
    ($($arg:tt)*) => {
        $crate::global_emit($crate::Level::Fatal, std::format_args!($($arg)*))
    };
}

// ===== Глобальный логгер =====

// Мьютекс и есть внешняя синхронизация для общего логгера.
static GLOBAL_LOGGER: Lazy<Mutex<Option<Logger>>> = Lazy::new(|| Mutex::new(None));

fn global_slot() -> std::sync::MutexGuard<'static, Option<Logger>> {
    // Паника внутри записи не должна навсегда отключать логгер.
    GLOBAL_LOGGER.lock().unwrap_or_else(|e| e.into_inner())
}

/// Устанавливает глобальный логгер. Предыдущий закрывается.
pub fn init_global_logger(logger: Logger) -> Result<()> {
    let previous = global_slot().replace(logger);
    match previous {
        Some(old) => old.destroy(),
        None => Ok(()),
    }
}

pub fn init_global_stream_logger(
    identifier: Option<&str>,
    level: Level,
    sink: Option<Sink>,
    config: Config,
) -> Result<()> {
    init_global_logger(Logger::stream(identifier, level, sink, config))
}

pub fn init_global_file_logger<P: AsRef<Path>>(
    identifier: Option<&str>,
    level: Level,
    path: P,
    mode: OpenMode,
    policy: Policy,
    threshold: u64,
    config: Config,
) -> Result<()> {
    let logger = Logger::file(identifier, level, path, mode, policy, threshold, config)?;
    init_global_logger(logger)
}

/// Снимает и закрывает глобальный логгер.
pub fn shutdown_global_logger() -> Result<()> {
    let logger = global_slot().take();
    match logger {
        Some(logger) => logger.destroy(),
        None => Ok(()),
    }
}

#[doc(hidden)]
pub fn global_emit(level: Level, args: fmt::Arguments<'_>) {
    let mut slot = global_slot();
    if let Some(ref mut logger) = *slot {
        if let Err(e) = logger.emit(level, args) {
            eprintln!("rotlog: failed to write log: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // Единственный тест, трогающий глобальный логгер: тесты идут параллельно.
    #[test]
    fn global_logger_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global.log");

        ginfo!("dropped, nothing installed");

        init_global_file_logger(
            Some("global"),
            Level::Info,
            &path,
            OpenMode::Write,
            Policy::None,
            0,
            Config::default(),
        )
        .unwrap();
        gdebug!("below minimum");
        ginfo!("hello {}", "world");
        gfatal!("last words");
        shutdown_global_logger().unwrap();

        ginfo!("after shutdown");
        shutdown_global_logger().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("INFO"));
        assert!(lines[0].ends_with("-- (global): hello world"));
        assert!(lines[1].starts_with("FATAL"));
    }

    #[test]
    fn level_macros_return_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("macros.log");
        let mut logger = Logger::plain_file(
            Some("m"),
            Level::Debug,
            &path,
            OpenMode::Write,
            Config::default(),
        )
        .unwrap();

        debug!(logger, "d").unwrap();
        notice!(logger, "n").unwrap();
        info!(logger, "i={}", 1).unwrap();
        warning!(logger, "w").unwrap();
        error!(logger, "e").unwrap();
        fatal!(logger, "f").unwrap();
        logger.destroy().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let labels: Vec<&str> = content
            .lines()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(labels, ["DEBUG", "NOTICE", "INFO", "WARNING", "ERROR", "FATAL"]);
    }
}
