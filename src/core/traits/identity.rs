use uuid::Uuid;

use crate::core::errors::Result;

/// Port for looking up a user's unique id from a display name.
///
/// Lookups may block; the caller waits for the answer before going on.
pub trait IdentityResolver: Send + Sync {
    /// `Ok(None)` when no user has this name.
    fn resolve(&self, name: &str) -> Result<Option<Uuid>>;
}
