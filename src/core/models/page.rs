use std::collections::BTreeMap;

use uuid::Uuid;

use crate::core::models::log_entry::LogEntry;

/// One page of the log: 1-based sequence index (newest first across the
/// filtered set) to entry.
pub type Page = BTreeMap<usize, LogEntry>;

/// Which page the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// The last page for the filter, whatever its number is.
    Last,
    /// An explicit page number, not yet checked against the page count.
    Number(i64),
}

/// A parsed `recent` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    pub filter: Option<Uuid>,
    pub page: PageRequest,
}

/// A validated page ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentPage {
    pub number: usize,
    pub max_page: usize,
    pub filter: Option<Uuid>,
    pub entries: Page,
}
