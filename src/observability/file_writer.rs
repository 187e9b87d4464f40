//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for log files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds `MAX_FILE_SIZE_BYTES`, it is renamed with a
/// timestamp suffix and a new file is created. Old backups beyond
/// `MAX_BACKUP_FILES` are cleaned up as part of the rotation.
///
/// The writer plugs into `tracing-subscriber`'s fmt layer through its
/// [`MakeWriter`] implementation; both the main plugin thread and the worker
/// thread write their log lines through it.
///
/// # Thread Safety
///
/// The file handle lives behind a `Mutex`, so concurrent writes from the
/// plugin and worker threads serialize rather than interleave.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write operation. This allows
    /// construction to succeed even if the file cannot be opened immediately.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends raw bytes to the file, rotating first if it has grown past
    /// the size threshold.
    ///
    /// # Errors
    ///
    /// May fail due to filesystem permissions, disk exhaustion, or mutex
    /// poisoning (if another thread panicked while holding the lock).
    fn append(&self, buf: &[u8]) -> std::io::Result<()> {
        let mut writer = self.lock_writer()?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate_files()?;
        }

        let file = match writer.as_mut() {
            Some(file) => file,
            None => writer.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            ),
        };

        file.write_all(buf)
    }

    /// Flushes the underlying file handle, if one is open.
    fn flush_file(&self) -> std::io::Result<()> {
        match self.lock_writer()?.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    /// Acquires the handle lock, surfacing poisoning as an I/O error.
    fn lock_writer(&self) -> std::io::Result<std::sync::MutexGuard<'_, Option<std::fs::File>>> {
        self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}"))
        })
    }

    /// True when the primary file has grown past the rotation threshold.
    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > MAX_FILE_SIZE_BYTES)
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// # Backup Naming
    ///
    /// Backups are named `<original_name>.log.<unix_timestamp>`, e.g.
    /// `zatlas.log.1234567890`.
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backup files beyond the retention limit, oldest first.
    ///
    /// Individual deletion errors are ignored so cleanup continues even if
    /// some files cannot be removed.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let Some(parent_dir) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(stem) = self.file_path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(());
        };

        let mut backups: Vec<(SystemTime, PathBuf)> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with(stem) && name.contains(".log."))
            })
            .map(|entry| {
                let modified = entry
                    .metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(UNIX_EPOCH);
                (modified, entry.path())
            })
            .collect();

        // Newest first; everything past the retention limit goes.
        backups.sort_by(|a, b| b.0.cmp(&a.0));
        for (_, old_backup) in backups.into_iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_file()
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a FileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_across_writes() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("zatlas.log");
        let writer = FileWriter::new(path.clone());

        (&writer).write_all(b"first line\n").expect("first write");
        (&writer).write_all(b"second line\n").expect("second write");
        (&writer).flush().expect("flush");

        let contents = fs::read_to_string(&path).expect("log readable");
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn oversized_file_is_rotated_before_the_next_write() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("zatlas.log");

        // Pre-inflate past the rotation threshold (sparse, no real I/O cost).
        let file = fs::File::create(&path).expect("create log");
        file.set_len(MAX_FILE_SIZE_BYTES + 1).expect("inflate log");
        drop(file);

        let writer = FileWriter::new(path.clone());
        (&writer).write_all(b"after rotation\n").expect("write");

        let contents = fs::read_to_string(&path).expect("log readable");
        assert_eq!(contents, "after rotation\n");

        let backups = fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".log."))
            .count();
        assert_eq!(backups, 1);
    }
}
