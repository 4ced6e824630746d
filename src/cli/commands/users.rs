use uuid::Uuid;

use crate::adapters::identity::file_identity_store::{FileIdentityStore, KnownUser};
use crate::cli::UsersAction;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{PermAuditError, Result};
use crate::core::models::command_result::CommandResult;
use crate::core::services::user_lookup::is_valid_name;

/// Execute the `permaudit users` command.
pub fn execute(action: &UsersAction) -> Result<CommandResult> {
    let data_dir = crate::cli::context::data_dir();
    let config = AppConfig::load(data_dir)?;
    let store = FileIdentityStore::new(data_dir.join(&config.identity.users_file));

    match action {
        UsersAction::Add { name, uuid } => execute_add(&store, name, uuid.as_deref()),
        UsersAction::List => execute_list(&store),
    }
}

/// Register a name, generating a random id unless one is given.
fn execute_add(store: &FileIdentityStore, name: &str, uuid: Option<&str>) -> Result<CommandResult> {
    if !is_valid_name(name) {
        output::error(&PermAuditError::InvalidUserEntry { entry: name.into() }.to_string());
        return Ok(CommandResult::InvalidArgs);
    }

    let id = match uuid {
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => id,
            Err(_) => {
                output::error(&PermAuditError::InvalidUserEntry { entry: raw.into() }.to_string());
                return Ok(CommandResult::InvalidArgs);
            }
        },
        None => Uuid::new_v4(),
    };

    store.add(&KnownUser {
        id,
        name: name.to_string(),
    })?;
    output::success(&format!("Registered {name} as {id}"));
    Ok(CommandResult::Success)
}

fn execute_list(store: &FileIdentityStore) -> Result<CommandResult> {
    let users = store.list()?;

    if users.is_empty() {
        output::warning("No users registered.");
        println!("  Run 'permaudit users add <name>' to add one.");
        return Ok(CommandResult::Success);
    }

    output::header(&format!("Known users ({})", users.len()));
    for user in &users {
        println!("  • {}  {}", user.id, user.name);
    }

    Ok(CommandResult::Success)
}
