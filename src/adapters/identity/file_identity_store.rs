use std::path::PathBuf;

use uuid::Uuid;

use crate::core::errors::{PermAuditError, Result};
use crate::core::traits::identity::IdentityResolver;

/// A known user: unique id plus the display name it was registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownUser {
    pub id: Uuid,
    pub name: String,
}

/// File-based user directory.
///
/// Format: one `<uuid> <name>` pair per line. Lines starting with `#` are
/// ignored.
///
/// Example `users.txt`:
/// ```text
/// # Registered 2026-10-01
/// 069a79f4-44e9-4726-a5be-fca90e38aaf5 Notch
/// 61699b2e-d327-4a01-9f1e-0ea8c3f06bc6 Dinnerbone
/// ```
#[derive(Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parse one line, skipping blanks and comments.
    fn parse_line(line_num: usize, line: &str) -> Result<Option<KnownUser>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let malformed = || PermAuditError::IdentityError {
            detail: format!("Malformed user entry at line {}: '{trimmed}'", line_num + 1),
        };

        let (id, name) = trimmed.split_once(char::is_whitespace).ok_or_else(malformed)?;
        let id = Uuid::parse_str(id).map_err(|_| malformed())?;
        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }

        Ok(Some(KnownUser {
            id,
            name: name.to_string(),
        }))
    }

    fn serialize(users: &[KnownUser]) -> String {
        users
            .iter()
            .map(|u| format!("{} {}", u.id.hyphenated(), u.name))
            .collect::<Vec<_>>()
            .join("\n")
            + "\n"
    }

    /// List all registered users in file order.
    pub fn list(&self) -> Result<Vec<KnownUser>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|_| PermAuditError::FileNotFound {
                path: self.path.clone(),
            })?;

        let mut users = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            if let Some(user) = Self::parse_line(line_num, line)? {
                users.push(user);
            }
        }
        Ok(users)
    }

    /// Register a user. Names are unique regardless of case.
    pub fn add(&self, user: &KnownUser) -> Result<()> {
        let mut existing = self.list()?;

        if let Some(taken) = existing
            .iter()
            .find(|u| u.name.eq_ignore_ascii_case(&user.name))
        {
            return Err(PermAuditError::UserAlreadyExists {
                name: taken.name.clone(),
                id: taken.id,
            });
        }

        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        existing.push(user.clone());
        std::fs::write(&self.path, Self::serialize(&existing))?;
        tracing::info!(name = %user.name, id = %user.id, "registered user");
        Ok(())
    }

    /// The registered name for an id, if any.
    pub fn name_of(&self, id: Uuid) -> Result<Option<String>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|u| u.id == id)
            .map(|u| u.name))
    }
}

impl IdentityResolver for FileIdentityStore {
    fn resolve(&self, name: &str) -> Result<Option<Uuid>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|u| u.name.eq_ignore_ascii_case(name))
            .map(|u| u.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NOTCH: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

    fn user(name: &str, id: u128) -> KnownUser {
        KnownUser {
            id: Uuid::from_u128(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn add_and_list() {
        let tmp = TempDir::new().unwrap();
        let store = FileIdentityStore::new(tmp.path().join("users.txt"));

        store.add(&user("Alice", 1)).unwrap();
        store.add(&user("Bob", 2)).unwrap();

        let users = store.list().unwrap();
        assert_eq!(users, vec![user("Alice", 1), user("Bob", 2)]);
    }

    #[test]
    fn duplicate_names_rejected_ignoring_case() {
        let tmp = TempDir::new().unwrap();
        let store = FileIdentityStore::new(tmp.path().join("users.txt"));

        store.add(&user("Alice", 1)).unwrap();
        let err = store.add(&user("ALICE", 2)).unwrap_err();
        assert!(matches!(err, PermAuditError::UserAlreadyExists { name, .. } if name == "Alice"));
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let store = FileIdentityStore::new(tmp.path().join("users.txt"));
        store.add(&user("Alice", 1)).unwrap();

        assert_eq!(store.resolve("alice").unwrap(), Some(Uuid::from_u128(1)));
        assert_eq!(store.resolve("bob").unwrap(), None);
    }

    #[test]
    fn missing_file_resolves_nothing() {
        let store = FileIdentityStore::new(PathBuf::from("/nonexistent/users.txt"));
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.resolve("Alice").unwrap(), None);
    }

    #[test]
    fn reads_hand_written_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("users.txt");
        std::fs::write(&path, format!("# staff\n\n{NOTCH}   Notch\n")).unwrap();

        let store = FileIdentityStore::new(path);
        let id = Uuid::parse_str(NOTCH).unwrap();
        assert_eq!(store.resolve("notch").unwrap(), Some(id));
        assert_eq!(store.name_of(id).unwrap(), Some("Notch".to_string()));
        assert_eq!(store.name_of(Uuid::nil()).unwrap(), None);
    }

    #[test]
    fn malformed_line_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("users.txt");
        std::fs::write(&path, "not-a-uuid Alice\n").unwrap();

        let err = FileIdentityStore::new(path).list().unwrap_err();
        assert!(matches!(err, PermAuditError::IdentityError { detail } if detail.contains("line 1")));
    }
}
