use crate::error::{LogsmithError, Result};
use chrono::{DateTime, Local, NaiveDate};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Date suffix appended to rotated files, e.g. `app.log.2024-03-15`
const ROTATED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Append-only file writer that rolls over at local midnight
///
/// The current file always lives at the configured path. When a write
/// observes that the local calendar day has advanced, the current file is
/// renamed with the date it covered, siblings beyond `backup_count` are
/// removed oldest-first, and a fresh file is opened before the write
/// proceeds. At most `backup_count + 1` files exist after any rotation.
#[derive(Debug)]
pub struct RollingFileWriter {
    /// Path of the current (active) log file
    path: PathBuf,
    /// Open append handle for the current file
    file: File,
    /// Number of rotated files retained
    backup_count: usize,
    /// Local calendar day the current file covers
    current_day: NaiveDate,
}

impl RollingFileWriter {
    /// Open (or create) the file at `path` for appending, creating parent
    /// directories as needed
    ///
    /// A file left over from a previous day rotates on the first write of
    /// the new day; its covered day is derived from the modification time.
    pub fn new(path: &Path, backup_count: usize) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LogsmithError::LogFileError(format!(
                        "Failed to create log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = Self::open_append(path)?;

        let current_day = file
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .map(|t| DateTime::<Local>::from(t).date_naive())
            .unwrap_or_else(|| Local::now().date_naive());

        Ok(Self {
            path: path.to_path_buf(),
            file,
            backup_count,
            current_day,
        })
    }

    /// Write one entry (which may span multiple lines for traces), rotating
    /// first if midnight has passed since the file's covered day
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_line_at(line, Local::now())
    }

    /// Same as `write_line` with an explicit clock, so rotation can be
    /// exercised without waiting for midnight
    pub(crate) fn write_line_at(&mut self, line: &str, now: DateTime<Local>) -> Result<()> {
        let today = now.date_naive();
        if today > self.current_day {
            self.rotate(today)?;
        }

        writeln!(self.file, "{}", line)
            .map_err(|e| LogsmithError::WriteError(format!("{}: {}", self.path.display(), e)))?;
        self.file
            .flush()
            .map_err(|e| LogsmithError::WriteError(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }

    /// Path of the current log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rotated files retained
    pub fn backup_count(&self) -> usize {
        self.backup_count
    }

    /// Flush the current file handle
    pub fn flush(&mut self) -> Result<()> {
        self.file
            .flush()
            .map_err(|e| LogsmithError::WriteError(format!("{}: {}", self.path.display(), e)))
    }

    /// Roll the current file over: archive it under the day it covered,
    /// prune old archives, and open a fresh current file
    fn rotate(&mut self, today: NaiveDate) -> Result<()> {
        // Complete any buffered write before the rename takes effect
        self.file.flush().map_err(|e| {
            LogsmithError::LogRotationError(format!("{}: {}", self.path.display(), e))
        })?;

        let rotated_path = self.rotated_path_for(self.current_day);
        std::fs::rename(&self.path, &rotated_path).map_err(|e| {
            LogsmithError::LogRotationError(format!(
                "Failed to archive {} as {}: {}",
                self.path.display(),
                rotated_path.display(),
                e
            ))
        })?;

        self.prune_backups()?;

        self.file = Self::open_append(&self.path)?;
        self.current_day = today;

        Ok(())
    }

    /// Archive name for the file covering `day`
    fn rotated_path_for(&self, day: NaiveDate) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{}", day.format(ROTATED_DATE_FORMAT)));
        PathBuf::from(name)
    }

    /// Remove rotated siblings beyond `backup_count`, oldest first
    fn prune_backups(&self) -> Result<()> {
        let mut backups = self.list_backups()?;
        backups.sort_by_key(|(day, _)| *day);

        while backups.len() > self.backup_count {
            let (_, oldest) = backups.remove(0);
            std::fs::remove_file(&oldest).map_err(|e| {
                LogsmithError::LogRotationError(format!(
                    "Failed to remove old log {}: {}",
                    oldest.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Rotated siblings of the current file, as (covered day, path) pairs
    fn list_backups(&self) -> Result<Vec<(NaiveDate, PathBuf)>> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                LogsmithError::LogRotationError(format!(
                    "Invalid log file path: {}",
                    self.path.display()
                ))
            })?;
        let prefix = format!("{}.", file_name);

        let mut backups = Vec::new();
        for entry in std::fs::read_dir(parent).map_err(|e| {
            LogsmithError::LogRotationError(format!("{}: {}", parent.display(), e))
        })? {
            let entry = entry.map_err(|e| {
                LogsmithError::LogRotationError(format!("{}: {}", parent.display(), e))
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let Some(suffix) = name.strip_prefix(&prefix) else {
                continue;
            };
            if let Ok(day) = NaiveDate::parse_from_str(suffix, ROTATED_DATE_FORMAT) {
                backups.push((day, entry.path()));
            }
        }

        Ok(backups)
    }

    fn open_append(path: &Path) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LogsmithError::LogFileError(format!("{}: {}", path.display(), e))
            })
    }
}
