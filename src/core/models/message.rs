use std::fmt;

/// Every message the `recent` command can send, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    RecentHeader {
        page: usize,
        max_page: usize,
    },
    RecentByHeader {
        name: String,
        page: usize,
        max_page: usize,
    },
    Entry {
        index: usize,
        elapsed: String,
        description: String,
    },
    NoEntries,
    InvalidPageRange {
        max_page: usize,
    },
    InvalidPageNumber {
        value: String,
    },
    UserInvalidEntry {
        entry: String,
    },
    UserNotFound {
        name: String,
    },
    Usage,
}

impl Message {
    /// Whether this message reports a failed command.
    pub fn is_failure(&self) -> bool {
        !matches!(
            self,
            Self::RecentHeader { .. } | Self::RecentByHeader { .. } | Self::Entry { .. }
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecentHeader { page, max_page } => {
                write!(f, "Recent actions (page {page} of {max_page})")
            }
            Self::RecentByHeader {
                name,
                page,
                max_page,
            } => write!(f, "Recent actions by {name} (page {page} of {max_page})"),
            Self::Entry {
                index,
                elapsed,
                description,
            } => write!(f, "#{index} -> ({elapsed} ago) {description}"),
            Self::NoEntries => write!(f, "No log entries to show."),
            Self::InvalidPageRange { max_page } => write!(
                f,
                "Invalid page number. Please enter a value between 1 and {max_page}."
            ),
            Self::InvalidPageNumber { value } => write!(f, "Invalid page number: '{value}'."),
            Self::UserInvalidEntry { entry } => {
                write!(f, "'{entry}' is not a valid username/uuid.")
            }
            Self::UserNotFound { name } => write!(f, "User '{name}' could not be found."),
            Self::Usage => write!(f, "Usage: recent [user] [page]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_line_text() {
        let msg = Message::Entry {
            index: 46,
            elapsed: "2 hours".into(),
            description: "(Alice) [U] (Bob) --> parent add vip".into(),
        };
        assert_eq!(
            msg.to_string(),
            "#46 -> (2 hours ago) (Alice) [U] (Bob) --> parent add vip"
        );
        assert!(!msg.is_failure());
    }

    #[test]
    fn page_range_reports_maximum() {
        let msg = Message::InvalidPageRange { max_page: 10 };
        assert!(msg.to_string().ends_with("between 1 and 10."));
        assert!(msg.is_failure());
    }
}
