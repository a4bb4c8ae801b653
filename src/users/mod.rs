mod store;

pub use store::SqliteUserStore;

use crate::types::error::Result;
use crate::types::user::{ChatProfile, User};
use async_trait::async_trait;

/// Outcome of a register-if-absent call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    Created(User),
    AlreadyRegistered,
}

/// Keyed persistence of users by chat id.
///
/// Implementations must be safe to call from concurrently running handlers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, chat_id: i64) -> Result<Option<User>>;

    /// Insert a user for `chat_id` unless one already exists. Existing records
    /// are left untouched, including `registered_at`.
    async fn register_if_absent(&self, chat_id: i64, profile: &ChatProfile)
        -> Result<Registration>;
}
