use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::app_config::LogSection;
use crate::core::errors::{PermAuditError, Result};
use crate::core::models::log_entry::LogEntry;
use crate::core::models::page::Page;
use crate::core::traits::audit::AuditLogStore;

/// Audit log kept as JSON lines, oldest first on disk.
///
/// Each line is a self-contained `LogEntry`. Appends never rewrite the
/// file; reads stream it line by line and order newest first.
pub struct JsonLogStore {
    log_path: PathBuf,
    page_size: usize,
}

impl JsonLogStore {
    /// Create a store over `{data_dir}/{log_file}`.
    pub fn new(data_dir: &Path, log_file: &str, page_size: usize) -> Self {
        Self {
            log_path: data_dir.join(log_file),
            page_size: page_size.max(1),
        }
    }

    /// Create a store from the `[log]` config section.
    pub fn from_config(data_dir: &Path, section: &LogSection) -> Self {
        Self::new(data_dir, &section.log_file, section.page_size)
    }

    /// Every entry on disk, in file order.
    fn read_all(&self) -> Result<Vec<LogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.log_path).map_err(|e| PermAuditError::AuditError {
            detail: format!("Cannot read audit log: {e}"),
        })?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| PermAuditError::AuditError {
                detail: format!("Error reading audit log line {}: {e}", line_num + 1),
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let entry: LogEntry =
                serde_json::from_str(trimmed).map_err(|e| PermAuditError::AuditError {
                    detail: format!("Malformed audit entry at line {}: {e}", line_num + 1),
                })?;
            entries.push(entry);
        }

        tracing::debug!(path = %self.log_path.display(), entries = entries.len(), "read audit log");
        Ok(entries)
    }

    /// Entries matching the filter, newest first. On equal timestamps the
    /// later line counts as newer.
    fn matching(&self, filter: Option<Uuid>) -> Result<Vec<LogEntry>> {
        let mut entries: Vec<LogEntry> = self
            .read_all()?
            .into_iter()
            .rev()
            .filter(|e| filter.is_none_or(|id| e.actor == id))
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}

impl AuditLogStore for JsonLogStore {
    fn log_event(&self, entry: &LogEntry) -> Result<()> {
        let line = serde_json::to_string(entry).map_err(|e| PermAuditError::AuditError {
            detail: format!("Failed to serialize audit entry: {e}"),
        })?;

        if let Some(parent) = self.log_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| PermAuditError::AuditError {
                detail: format!("Cannot open audit log at {}: {e}", self.log_path.display()),
            })?;

        writeln!(file, "{line}").map_err(|e| PermAuditError::AuditError {
            detail: format!("Failed to write audit entry: {e}"),
        })?;

        Ok(())
    }

    fn page_count(&self, filter: Option<Uuid>) -> Result<usize> {
        Ok(self.matching(filter)?.len().div_ceil(self.page_size))
    }

    fn page(&self, number: usize, filter: Option<Uuid>) -> Result<Page> {
        let Some(start) = number.checked_sub(1).map(|n| n * self.page_size) else {
            return Ok(Page::new());
        };

        Ok(self
            .matching(filter)?
            .into_iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .map(|(i, entry)| (i + 1, entry))
            .collect())
    }
}
