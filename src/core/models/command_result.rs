/// Outcome of a command as seen by the surrounding command framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Success,
    InvalidArgs,
    StateError,
}

impl CommandResult {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InvalidArgs => 2,
            Self::StateError => 3,
        }
    }
}
