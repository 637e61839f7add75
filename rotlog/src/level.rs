use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub(crate) const COLOR_RESET: &str = "\x1B[00m";

// ===== Уровни логгирования =====

/// Уровни упорядочены по возрастанию важности: `Debug < Notice < ... < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Notice,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Notice,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// ANSI-последовательность цвета уровня.
    pub fn color(&self) -> &'static str {
        match self {
            Level::Debug => "\x1B[34m",
            Level::Notice => COLOR_RESET,
            Level::Info => "\x1B[32m",
            Level::Warning => "\x1B[33m",
            Level::Error => "\x1B[31m",
            Level::Fatal => "\x1B[35m",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "NOTICE" => Ok(Level::Notice),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(Error::UnknownLevel(s.to_owned())),
        }
    }
}
