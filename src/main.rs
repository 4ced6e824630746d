mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use crate::core::models::command_result::CommandResult;

fn main() {
    let args = Cli::parse();

    init_tracing(args.quiet, args.verbose);
    cli::context::init(args.dir.as_deref());

    let result = match &args.command {
        Commands::Recent { args } => cli::commands::recent::execute(args),
        Commands::Record {
            actor,
            target,
            action,
            kind,
        } => cli::commands::record::execute(actor, target, action, *kind),
        Commands::Users { action } => cli::commands::users::execute(action),
    };

    match result {
        Ok(CommandResult::Success) => {}
        Ok(code) => std::process::exit(code.exit_code()),
        Err(e) => {
            cli::output::error(&format!("Error: {e}"));
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr. `PERMAUDIT_LOG` overrides the flag-derived level.
fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("PERMAUDIT_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
