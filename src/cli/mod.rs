pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::models::log_entry::TargetKind;

/// Browse the permissions audit log.
#[derive(Parser, Debug)]
#[command(name = "permaudit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory holding the log, users and config.toml
    #[arg(long, global = true, env = "PERMAUDIT_DIR")]
    pub dir: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View recent actions, optionally for one user
    Recent {
        /// [user] [page]: name or uuid to filter by, page number to view
        #[arg(num_args = 0..=2, value_name = "USER|PAGE", allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Record an action in the log
    Record {
        /// Name or uuid of the user who performed the action
        actor: String,
        /// Name of the user, group or track acted upon
        target: String,
        /// Description of the action, e.g. "permission set build true"
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        action: Vec<String>,
        /// What kind of object the target is
        #[arg(long, value_enum, default_value = "user")]
        kind: TargetKind,
    },

    /// Manage known users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// Register a user name
    Add {
        /// Display name (up to 16 letters, digits or underscores)
        name: String,
        /// Unique id to register; a random one is generated if omitted
        #[arg(long)]
        uuid: Option<String>,
    },
    /// List known users
    List,
}
