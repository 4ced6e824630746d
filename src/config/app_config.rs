use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{PermAuditError, Result};

/// Top-level configuration read from `<data dir>/config.toml`.
///
/// Every section is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogSection,
    #[serde(default)]
    pub identity: IdentitySection,
}

impl AppConfig {
    /// Load the configuration from `<data dir>/config.toml`.
    ///
    /// Filenames are validated after parsing so a config file cannot point
    /// the stores outside the data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join("config.toml");
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        Self::parse(&content)
    }

    /// Parse and validate config file content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| PermAuditError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;

        if config.log.page_size == 0 {
            return Err(PermAuditError::InvalidConfig {
                detail: "log.page_size must be at least 1".into(),
            });
        }

        crate::cli::context::validate_simple_filename(&config.log.log_file, "audit log file")?;
        crate::cli::context::validate_simple_filename(&config.identity.users_file, "users file")?;

        Ok(config)
    }
}

/// The `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Entries per page shown by `recent`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            page_size: default_page_size(),
        }
    }
}

/// The `[identity]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentitySection {
    #[serde(default = "default_users_file")]
    pub users_file: String,
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            users_file: default_users_file(),
        }
    }
}

fn default_log_file() -> String {
    "actions.log".to_string()
}

fn default_page_size() -> usize {
    5
}

fn default_users_file() -> String {
    "users.txt".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = AppConfig::load(tmp.path()).unwrap();
        assert_eq!(config.log.log_file, "actions.log");
        assert_eq!(config.log.page_size, 5);
        assert_eq!(config.identity.users_file, "users.txt");
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AppConfig::parse("[log]\npage_size = 10\n").unwrap();
        assert_eq!(config.log.page_size, 10);
        assert_eq!(config.log.log_file, "actions.log");
    }

    #[test]
    fn loads_from_data_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            "[identity]\nusers_file = \"staff.txt\"\n",
        )
        .unwrap();
        let config = AppConfig::load(tmp.path()).unwrap();
        assert_eq!(config.identity.users_file, "staff.txt");
    }

    #[test]
    fn zero_page_size_rejected() {
        let err = AppConfig::parse("[log]\npage_size = 0\n").unwrap_err();
        assert!(matches!(err, PermAuditError::InvalidConfig { .. }));
    }

    #[test]
    fn path_traversal_rejected() {
        let err = AppConfig::parse("[log]\nlog_file = \"../../etc/passwd\"\n").unwrap_err();
        assert!(matches!(err, PermAuditError::InvalidConfig { .. }));
    }

    #[test]
    fn garbage_rejected() {
        assert!(AppConfig::parse("this is = = not toml").is_err());
    }
}
