//! Ошибки логгера

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Не удалось открыть файл лога (при создании, ротации или перезаписи)
    #[error("Unable to open log file '{}': {source}", .path.display())]
    PathUnavailable { path: PathBuf, source: io::Error },

    /// Ошибка записи или сброса буфера
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown log level: '{0}'")]
    UnknownLevel(String),
}

impl Error {
    pub(crate) fn path_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::PathUnavailable {
            path: path.into(),
            source,
        }
    }
}
