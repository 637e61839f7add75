use std::fmt;
use std::path::Path;

use chrono::Utc;

use crate::config::{Config, OpenMode};
use crate::error::Result;
use crate::file::FileHandle;
use crate::format;
use crate::level::Level;
use crate::policy::{Action, ByteCounter, Policy, PolicyEngine};
use crate::target::{Sink, Target};

const DEFAULT_IDENTIFIER: &str = "unknown";

// ===== Основной логгер =====

/// Логгер в поток или в файл.
///
/// Запись требует `&mut self`: для работы из нескольких потоков логгер
/// нужно обернуть во внешний `Mutex`.
#[derive(Debug)]
pub struct Logger {
    identifier: String,
    target: Target,
    level: Level,
    engine: PolicyEngine,
    written: ByteCounter,
    colored: bool,
}

impl Logger {
    /// Логгер во внешний поток; без `sink` пишет в stderr.
    pub fn stream(
        identifier: Option<&str>,
        level: Level,
        sink: Option<Sink>,
        config: Config,
    ) -> Self {
        let target = Target::Stream(sink.unwrap_or_default());
        let colored = config.color_enabled && target.is_interactive();
        Logger {
            identifier: identifier.unwrap_or(DEFAULT_IDENTIFIER).to_owned(),
            target,
            level: config.effective_level(level),
            engine: PolicyEngine::new(Policy::None, 0),
            written: ByteCounter::default(),
            colored,
        }
    }

    pub fn file<P: AsRef<Path>>(
        identifier: Option<&str>,
        level: Level,
        path: P,
        mode: OpenMode,
        policy: Policy,
        threshold: u64,
        config: Config,
    ) -> Result<Self> {
        let handle = FileHandle::open(path, mode)?;
        Ok(Logger {
            identifier: identifier.unwrap_or(DEFAULT_IDENTIFIER).to_owned(),
            target: Target::File(handle),
            level: config.effective_level(level),
            engine: PolicyEngine::new(policy, threshold),
            written: ByteCounter::default(),
            colored: false,
        })
    }

    pub fn plain_file<P: AsRef<Path>>(
        identifier: Option<&str>,
        level: Level,
        path: P,
        mode: OpenMode,
        config: Config,
    ) -> Result<Self> {
        Self::file(identifier, level, path, mode, Policy::None, 0, config)
    }

    /// Ротирующий логгер; исходный файл всегда открывается с обрезкой.
    pub fn rotating<P: AsRef<Path>>(
        identifier: Option<&str>,
        level: Level,
        path: P,
        threshold: u64,
        config: Config,
    ) -> Result<Self> {
        Self::file(
            identifier,
            level,
            path,
            OpenMode::Write,
            Policy::Rotate,
            threshold,
            config,
        )
    }

    pub fn overwriting<P: AsRef<Path>>(
        identifier: Option<&str>,
        level: Level,
        path: P,
        mode: OpenMode,
        threshold: u64,
        config: Config,
    ) -> Result<Self> {
        Self::file(
            identifier,
            level,
            path,
            mode,
            Policy::Overwrite,
            threshold,
            config,
        )
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn policy(&self) -> Policy {
        self.engine.policy()
    }

    pub fn threshold(&self) -> u64 {
        self.engine.threshold()
    }

    /// Байты, записанные в текущий открытый файл (или поток) с момента его открытия.
    pub fn written_bytes(&self) -> u64 {
        self.written.get()
    }

    pub fn is_file(&self) -> bool {
        matches!(self.target, Target::File(_))
    }

    /// Текущий путь файла; `None` для потокового логгера.
    pub fn path(&self) -> Option<&Path> {
        match &self.target {
            Target::File(handle) => Some(handle.path()),
            Target::Stream(_) => None,
        }
    }

    pub fn emit(&mut self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        if level < self.level {
            return Ok(());
        }

        self.apply_policy()?;

        let message = fmt::format(args);
        let line = format::render_line(level, &self.identifier, self.colored, Utc::now(), &message);
        // При ошибке на середине строки уже записанные байты в счётчик не попадают.
        let n = self.target.write_line(&line)?;
        self.written.add(n);
        Ok(())
    }

    fn apply_policy(&mut self) -> Result<()> {
        let handle = match &mut self.target {
            Target::File(handle) => handle,
            Target::Stream(_) => return Ok(()),
        };

        match self.engine.decide(self.written.get()) {
            Action::Nothing => return Ok(()),
            Action::Rotate => handle.reopen_at_next_rotation_path()?,
            Action::Overwrite => handle.reopen_truncate()?,
        }
        self.written.reset();
        Ok(())
    }

    pub fn debug(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Debug, args)
    }

    pub fn notice(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Notice, args)
    }

    pub fn info(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Info, args)
    }

    pub fn warning(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Warning, args)
    }

    pub fn error(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Error, args)
    }

    /// Только метка важности: процесс не завершается.
    pub fn fatal(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(Level::Fatal, args)
    }

    /// Закрывает файл. Внешний поток остаётся открытым.
    pub fn destroy(self) -> Result<()> {
        match self.target {
            Target::File(handle) => handle.close(),
            Target::Stream(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn stream_logger(level: Level, config: Config) -> (Logger, Shared) {
        let buf = Shared::default();
        let logger = Logger::stream(Some("test"), level, Some(Sink::writer(buf.clone())), config);
        (logger, buf)
    }

    #[test]
    fn identifier_defaults_to_unknown() {
        let logger = Logger::stream(None, Level::Info, None, Config::default());
        assert_eq!(logger.identifier(), "unknown");
        assert!(!logger.is_file());
        assert_eq!(logger.path(), None);
        assert_eq!(logger.policy(), Policy::None);
    }

    #[test]
    fn debug_disabled_upgrades_minimum_level() {
        let (mut logger, buf) = stream_logger(Level::Debug, Config::default().with_debug(false));
        assert_eq!(logger.level(), Level::Notice);
        logger.debug(format_args!("hidden")).unwrap();
        logger.notice(format_args!("shown")).unwrap();
        let out = buf.text();
        assert!(!out.contains("hidden"));
        assert!(out.contains("NOTICE"));
    }

    #[test]
    fn every_level_below_minimum_is_suppressed() {
        for (i, min) in Level::ALL.iter().enumerate() {
            for below in &Level::ALL[..i] {
                let (mut logger, buf) = stream_logger(*min, Config::default());
                logger.emit(*below, format_args!("x")).unwrap();
                assert!(buf.text().is_empty(), "{below} leaked through {min}");
                assert_eq!(logger.written_bytes(), 0);

                logger.emit(*min, format_args!("x")).unwrap();
                assert!(buf.text().contains(min.as_str()));
            }
        }
    }

    #[test]
    fn stream_line_has_no_color_and_counts_bytes() {
        let (mut logger, buf) = stream_logger(Level::Debug, Config::default());
        logger.info(format_args!("value={}", 42)).unwrap();
        let out = buf.text();
        assert!(!out.contains('\x1B'));
        assert!(out.starts_with("INFO    ["));
        assert!(out.ends_with(" UTC] -- (test): value=42\n"));
        assert_eq!(logger.written_bytes(), out.len() as u64);
    }

    #[test]
    fn fatal_is_only_a_label() {
        let (mut logger, buf) = stream_logger(Level::Debug, Config::default());
        logger.fatal(format_args!("boom")).unwrap();
        logger.info(format_args!("still alive")).unwrap();
        let out = buf.text();
        assert!(out.contains("FATAL"));
        assert!(out.contains("still alive"));
    }

    #[test]
    fn file_logger_exposes_path_and_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger =
            Logger::rotating(Some("svc"), Level::Info, &path, 64, Config::default()).unwrap();
        assert!(logger.is_file());
        assert_eq!(logger.path(), Some(path.as_path()));
        assert_eq!(logger.policy(), Policy::Rotate);
        assert_eq!(logger.threshold(), 64);
        logger.destroy().unwrap();
    }

    #[test]
    fn file_logger_never_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let mut logger =
            Logger::plain_file(None, Level::Debug, &path, OpenMode::Write, Config::default())
                .unwrap();
        logger.error(format_args!("plain")).unwrap();
        logger.destroy().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ERROR   ["));
        assert!(!content.contains('\x1B'));
    }

    #[test]
    fn failed_rotation_keeps_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        // Каталог на месте следующего файла ротации не даст его открыть.
        fs::create_dir(dir.path().join("app.log.0")).unwrap();

        let mut logger = Logger::rotating(None, Level::Info, &path, 0, Config::default()).unwrap();
        let err = logger.info(format_args!("lost")).unwrap_err();
        assert!(matches!(err, Error::PathUnavailable { .. }));
        assert_eq!(logger.path(), Some(path.as_path()));
        assert_eq!(logger.written_bytes(), 0);
        logger.destroy().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn failed_overwrite_keeps_current_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let mut logger =
            Logger::overwriting(None, Level::Info, &path, OpenMode::Write, 0, Config::default())
                .unwrap();
        logger.info(format_args!("kept")).unwrap();
        let written = logger.written_bytes();
        assert!(written > 0);

        // Каталог на месте файла не даст переоткрыть его с обрезкой.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let err = logger.info(format_args!("lost")).unwrap_err();
        assert!(matches!(err, Error::PathUnavailable { .. }));
        assert_eq!(logger.written_bytes(), written);
        assert_eq!(logger.path(), Some(path.as_path()));
        logger.destroy().unwrap();
    }
}
