use chrono::Utc;

use crate::adapters::audit::json_log_store::JsonLogStore;
use crate::adapters::identity::file_identity_store::FileIdentityStore;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{PermAuditError, Result};
use crate::core::models::command_result::CommandResult;
use crate::core::models::log_entry::{LogEntry, TargetKind};
use crate::core::services::user_lookup::{UserToken, parse_user_token, resolve_user};
use crate::core::traits::audit::AuditLogStore;

/// Execute the `permaudit record` command.
///
/// The actor is looked up the same way `recent` looks up its user filter.
pub fn execute(
    actor: &str,
    target: &str,
    action: &[String],
    kind: TargetKind,
) -> Result<CommandResult> {
    let data_dir = crate::cli::context::data_dir();
    let config = AppConfig::load(data_dir)?;
    let users = FileIdentityStore::new(data_dir.join(&config.identity.users_file));

    let id = match resolve_user(actor, &users) {
        Ok(id) => id,
        Err(e @ (PermAuditError::InvalidUserEntry { .. } | PermAuditError::UserNotFound { .. })) => {
            output::error(&e.to_string());
            return Ok(e.command_result());
        }
        Err(e) => return Err(e),
    };

    let actor_name = match parse_user_token(actor)? {
        UserToken::Name(name) => name,
        UserToken::Id(_) => users.name_of(id)?.unwrap_or_else(|| id.to_string()),
    };

    let entry = LogEntry {
        timestamp: Utc::now(),
        actor: id,
        actor_name,
        target_kind: kind,
        target_name: target.to_string(),
        action: action.join(" "),
    };

    let store = JsonLogStore::from_config(data_dir, &config.log);
    store.log_event(&entry)?;
    tracing::info!(actor = %entry.actor, action = %entry.action, "recorded action");

    output::success(&format!("Recorded: {}", entry.formatted()));
    Ok(CommandResult::Success)
}
