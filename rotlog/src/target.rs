use std::fmt;
use std::io::{self, IsTerminal, Write};

use crate::error::Result;
use crate::file::FileHandle;

// ===== Куда пишет логгер =====

/// Внешний поток. Логгер никогда его не закрывает.
#[derive(Default)]
pub enum Sink {
    #[default]
    Stderr,
    Stdout,
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    pub fn writer<W: Write + Send + 'static>(w: W) -> Self {
        Sink::Writer(Box::new(w))
    }

    /// Цвет выводится только в стандартные потоки, подключённые к терминалу.
    pub fn is_interactive(&self) -> bool {
        match self {
            Sink::Stderr => io::stderr().is_terminal(),
            Sink::Stdout => io::stdout().is_terminal(),
            Sink::Writer(_) => false,
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(buf)?;
                err.flush()
            }
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(buf)?;
                out.flush()
            }
            Sink::Writer(w) => {
                w.write_all(buf)?;
                w.flush()
            }
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stderr => f.write_str("Stderr"),
            Sink::Stdout => f.write_str("Stdout"),
            Sink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

#[derive(Debug)]
pub enum Target {
    Stream(Sink),
    File(FileHandle),
}

impl Target {
    /// Пишет строку целиком и сразу сбрасывает буфер. Возвращает число байтов.
    pub fn write_line(&mut self, line: &str) -> Result<usize> {
        match self {
            Target::Stream(sink) => sink.write_all(line.as_bytes())?,
            Target::File(handle) => handle.write_all(line.as_bytes())?,
        }
        Ok(line.len())
    }

    pub fn is_interactive(&self) -> bool {
        match self {
            Target::Stream(sink) => sink.is_interactive(),
            Target::File(_) => false,
        }
    }
}
