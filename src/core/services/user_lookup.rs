use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

use crate::core::errors::{PermAuditError, Result};
use crate::core::traits::identity::IdentityResolver;

/// Longest display name a user can have.
pub const MAX_NAME_LENGTH: usize = 16;

static NON_USERNAME: OnceLock<Regex> = OnceLock::new();

fn non_username() -> &'static Regex {
    NON_USERNAME.get_or_init(|| Regex::new("[^A-Za-z0-9_]").expect("static pattern is valid"))
}

/// A user argument after syntax checks, before any lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserToken {
    Id(Uuid),
    Name(String),
}

/// Classify a raw user argument.
///
/// UUID literals (hyphenated or plain 32-hex) win. Anything else must be a
/// display name: 1 to 16 characters from `[A-Za-z0-9_]`.
pub fn parse_user_token(token: &str) -> Result<UserToken> {
    if let Ok(id) = Uuid::parse_str(token) {
        return Ok(UserToken::Id(id));
    }
    if is_valid_name(token) {
        Ok(UserToken::Name(token.to_string()))
    } else {
        Err(PermAuditError::InvalidUserEntry {
            entry: token.to_string(),
        })
    }
}

/// Whether `name` is acceptable as a display name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_NAME_LENGTH && !non_username().is_match(name)
}

/// Turn a raw user argument into a unique id, asking the resolver for names.
pub fn resolve_user(token: &str, resolver: &dyn IdentityResolver) -> Result<Uuid> {
    match parse_user_token(token)? {
        UserToken::Id(id) => Ok(id),
        UserToken::Name(name) => {
            tracing::debug!(name = %name, "resolving display name");
            resolver
                .resolve(&name)?
                .ok_or(PermAuditError::UserNotFound { name })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct OneUser {
        calls: AtomicUsize,
    }

    const ALICE: Uuid = Uuid::from_u128(0xa11ce);

    impl IdentityResolver for OneUser {
        fn resolve(&self, name: &str) -> Result<Option<Uuid>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((name.eq_ignore_ascii_case("alice")).then_some(ALICE))
        }
    }

    fn resolver() -> OneUser {
        OneUser {
            calls: AtomicUsize::new(0),
        }
    }

    #[test]
    fn uuid_literals_are_used_as_is() {
        let id = "069a79f4-44e9-4726-a5be-fca90e38aaf5";
        let simple = "069a79f444e94726a5befca90e38aaf5";
        let expected = Uuid::parse_str(id).unwrap();
        assert_eq!(parse_user_token(id).unwrap(), UserToken::Id(expected));
        assert_eq!(parse_user_token(simple).unwrap(), UserToken::Id(expected));
    }

    #[test]
    fn short_names_are_names() {
        assert_eq!(
            parse_user_token("Notch_99").unwrap(),
            UserToken::Name("Notch_99".into())
        );
    }

    #[test]
    fn long_or_odd_names_are_rejected() {
        for bad in ["abcdefghijklmnopq", "not_a_user!!", "two words", ""] {
            assert!(
                matches!(
                    parse_user_token(bad),
                    Err(PermAuditError::InvalidUserEntry { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn sixteen_characters_is_allowed() {
        assert!(is_valid_name("abcdefghijklmnop"));
    }

    #[test]
    fn invalid_token_never_reaches_resolver() {
        let r = resolver();
        let err = resolve_user("not_a_user!!", &r).unwrap_err();
        assert!(matches!(err, PermAuditError::InvalidUserEntry { .. }));
        assert_eq!(r.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn uuid_token_skips_resolver() {
        let r = resolver();
        let id = resolve_user("069a79f4-44e9-4726-a5be-fca90e38aaf5", &r).unwrap();
        assert_eq!(id.to_string(), "069a79f4-44e9-4726-a5be-fca90e38aaf5");
        assert_eq!(r.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn names_are_resolved() {
        let r = resolver();
        assert_eq!(resolve_user("Alice", &r).unwrap(), ALICE);
        assert_eq!(r.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = resolve_user("Bob", &resolver()).unwrap_err();
        assert!(matches!(err, PermAuditError::UserNotFound { name } if name == "Bob"));
    }
}
