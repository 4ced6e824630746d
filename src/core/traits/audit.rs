use uuid::Uuid;

use crate::core::errors::Result;
use crate::core::models::log_entry::LogEntry;
use crate::core::models::page::Page;

/// Port for recording and paging through audit actions.
///
/// The store owns ordering: index 1 is the newest entry matching the
/// filter. Callers never mutate stored entries.
pub trait AuditLogStore: Send + Sync {
    /// Append an entry to the audit log.
    fn log_event(&self, entry: &LogEntry) -> Result<()>;

    /// Number of pages for the filter (`None` = whole log). Zero when empty.
    fn page_count(&self, filter: Option<Uuid>) -> Result<usize>;

    /// Entries of the 1-based page for the filter, keyed by sequence index.
    fn page(&self, number: usize, filter: Option<Uuid>) -> Result<Page>;
}
