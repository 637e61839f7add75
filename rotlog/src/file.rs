use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OpenMode;
use crate::error::{Error, Result};

// ===== Файл лога =====

/// Открытый файл лога вместе с его текущим путём.
#[derive(Debug)]
pub struct FileHandle {
    file: File,
    path: PathBuf,
}

impl FileHandle {
    pub fn open<P: AsRef<Path>>(path: P, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = open_file(&path, mode)?;
        Ok(FileHandle { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn close(mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }

    /// Обрезает файл по тому же пути.
    pub fn reopen_truncate(&mut self) -> Result<()> {
        // Старый дескриптор закрывается при замене, только если новый открылся.
        self.file = open_file(&self.path, OpenMode::Write)?;
        Ok(())
    }

    /// Переходит на файл со следующим суффиксом: `app.log` -> `app.log.0` -> `app.log.1`.
    /// Существующий файл с таким именем будет перезаписан.
    pub fn reopen_at_next_rotation_path(&mut self) -> Result<()> {
        let next = next_rotation_path(&self.path);
        let file = open_file(&next, OpenMode::Write)?;
        self.file = file;
        self.path = next;
        Ok(())
    }

    pub(crate) fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.file.write_all(buf)?;
        self.file.flush()?;
        Ok(())
    }
}

fn open_file(path: &Path, mode: OpenMode) -> Result<File> {
    let mut options = OpenOptions::new();
    match mode {
        OpenMode::Write => options.write(true).create(true).truncate(true),
        OpenMode::Append => options.append(true).create(true),
    };
    options
        .open(path)
        .map_err(|e| Error::path_unavailable(path, e))
}

/// Следующее имя в цепочке ротации.
///
/// Расширение разбирается как целый счётчик `c` (нечисловое или пустое даёт 0).
/// Если путь уже оканчивается на `.c`, суффикс заменяется на `.{c+1}`,
/// иначе к пути дописывается `.c`. Если `c+1` не помещается в `i64`,
/// начинается новая цепочка с `.0`.
pub fn next_rotation_path(path: &Path) -> PathBuf {
    let ext = path.extension().and_then(|e| e.to_str());
    let counter = ext.and_then(|e| e.parse::<i64>().ok()).unwrap_or(0);

    if ext == Some(counter.to_string().as_str()) {
        if let Some(next) = counter.checked_add(1) {
            return path.with_extension(next.to_string());
        }
        return append_suffix(path, 0);
    }
    append_suffix(path, counter)
}

fn append_suffix(path: &Path, counter: i64) -> PathBuf {
    let mut next = OsString::from(path.as_os_str());
    next.push(format!(".{}", counter));
    PathBuf::from(next)
}
