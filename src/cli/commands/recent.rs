use crate::adapters::audit::json_log_store::JsonLogStore;
use crate::adapters::console::console_sender::ConsoleSender;
use crate::adapters::identity::file_identity_store::FileIdentityStore;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::command_result::CommandResult;
use crate::core::services::recent_service::RecentService;

/// Execute the `permaudit recent [user] [page]` command.
///
/// Shows one page of the audit log, newest actions first. With no page
/// the last page is shown.
pub fn execute(args: &[String]) -> Result<CommandResult> {
    let data_dir = crate::cli::context::data_dir();
    let config = AppConfig::load(data_dir)?;

    let service = RecentService {
        store: JsonLogStore::from_config(data_dir, &config.log),
        resolver: FileIdentityStore::new(data_dir.join(&config.identity.users_file)),
    };

    service.handle(args, &ConsoleSender)
}
