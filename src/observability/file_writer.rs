//! Append-only line writer with size-based rotation.
//!
//! When the active file grows past its limit it is shifted into a numbered
//! backup chain (`name.1` newest, `name.N` oldest) and a fresh file is started.
//! The oldest backup falls off the end of the chain.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the active file is rotated (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept next to the active one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
///
/// The file is opened lazily on the first write, so construction never fails.
///
/// # Example
///
/// ```ignore
/// let writer = FileWriter::new(PathBuf::from("/tmp/galeria-otlp.json"));
/// writer.write_line(r#"{"resourceSpans":[]}"#)?;
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer rotating at `max_bytes` and keeping `max_backups` files.
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Fails if the lock is poisoned or on any rename, open or write error.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        let file = match guard.as_mut() {
            Some(file) => file,
            None => guard.insert(OpenOptions::new().create(true).append(true).open(&self.file_path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|meta| meta.len() >= self.max_bytes)
    }

    /// Shifts `name.{n}` to `name.{n+1}` from the oldest down, then moves the
    /// active file to `name.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }

        fs::rename(&self.file_path, self.backup_path(1))
    }

    /// Path of the `index`-th backup, e.g. `galeria-otlp.json.2`.
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.file_name().unwrap_or_default().to_os_string();
        name.push(format!(".{index}"));
        self.file_path.with_file_name(name)
    }

    /// Path of the active file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
