use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::errors::{PermAuditError, Result};

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".permaudit";

/// Initialize the global data directory path.
/// If `custom` is provided, uses that path; otherwise defaults to `.permaudit`.
pub fn init(custom: Option<&str>) {
    let dir = custom
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let _ = DATA_DIR.set(dir);
}

/// Get the current data directory path.
pub fn data_dir() -> &'static Path {
    DATA_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(DEFAULT_DATA_DIR))
}

/// Reject filenames that could escape the data directory.
pub fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if bad {
        return Err(PermAuditError::InvalidConfig {
            detail: format!("Invalid {what} name '{name}': must be a plain file name"),
        });
    }
    Ok(())
}
