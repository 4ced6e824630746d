use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of object an action was performed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    User,
    Group,
    Track,
}

impl TargetKind {
    /// Single-letter code used in the formatted description.
    pub fn code(self) -> char {
        match self {
            Self::User => 'U',
            Self::Group => 'G',
            Self::Track => 'T',
        }
    }
}

/// A single audit action (JSON lines format). Never mutated once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub actor: Uuid,
    pub actor_name: String,
    pub target_kind: TargetKind,
    pub target_name: String,
    pub action: String,
}

impl LogEntry {
    /// Human-readable description, e.g. `(Alice) [G] (admin) --> set build true`.
    pub fn formatted(&self) -> String {
        format!(
            "({}) [{}] ({}) --> {}",
            self.actor_name,
            self.target_kind.code(),
            self.target_name,
            self.action
        )
    }
}
