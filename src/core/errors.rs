use std::path::PathBuf;

use crate::core::models::command_result::CommandResult;
use crate::core::models::message::Message;

/// All domain errors for permaudit.
///
/// The first group are command failures the operator caused (bad name,
/// bad page). They are turned into a message and a result code by the
/// command handler. Everything else is fatal for the invocation.
#[derive(Debug, thiserror::Error)]
pub enum PermAuditError {
    #[error("'{entry}' is not a valid username/uuid")]
    InvalidUserEntry { entry: String },

    #[error(
        "User '{name}' could not be found\n\n  \
         Register the user first: permaudit users add {name}"
    )]
    UserNotFound { name: String },

    #[error("No log entries to show")]
    NoEntries,

    #[error("Invalid page number. Please enter a value between 1 and {max_page}")]
    InvalidPageRange { max_page: usize },

    #[error("Invalid page number: '{value}'")]
    InvalidPageNumber { value: String },

    #[error("Too many arguments ({count})\n\n  Usage: permaudit recent [user] [page]")]
    TooManyArguments { count: usize },

    #[error("User '{name}' is already registered as {id}")]
    UserAlreadyExists { name: String, id: uuid::Uuid },

    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Audit log error: {detail}")]
    AuditError { detail: String },

    #[error("Identity store error: {detail}")]
    IdentityError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PermAuditError {
    /// The message shown to the operator for a command failure, or `None`
    /// when the error is fatal and must propagate.
    pub fn user_message(&self) -> Option<Message> {
        let message = match self {
            Self::InvalidUserEntry { entry } => Message::UserInvalidEntry {
                entry: entry.clone(),
            },
            Self::UserNotFound { name } => Message::UserNotFound { name: name.clone() },
            Self::NoEntries => Message::NoEntries,
            Self::InvalidPageRange { max_page } => Message::InvalidPageRange {
                max_page: *max_page,
            },
            Self::InvalidPageNumber { value } => Message::InvalidPageNumber {
                value: value.clone(),
            },
            Self::TooManyArguments { .. } => Message::Usage,
            _ => return None,
        };
        Some(message)
    }

    /// Result code reported for a command failure.
    ///
    /// An empty log is a state problem, not an argument problem.
    pub fn command_result(&self) -> CommandResult {
        match self {
            Self::NoEntries => CommandResult::StateError,
            _ => CommandResult::InvalidArgs,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PermAuditError>;
