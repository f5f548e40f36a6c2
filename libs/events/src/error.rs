//! Error types for event construction.

use palaver_id::{GuildId, UserId};
use palaver_model::CacheError;
use thiserror::Error;

/// Errors that can occur when constructing an update event.
///
/// Construction has exactly one failure mode: the member reference cannot
/// be resolved. Everything else about an event is total over validated
/// state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The member the event concerns is not in the cache.
    #[error("member {user_id} in guild {guild_id} is not cached")]
    MemberUnavailable { guild_id: GuildId, user_id: UserId },

    /// The cache backing the member reference has been dropped.
    #[error("member cache has been dropped")]
    CacheDetached,
}

impl From<CacheError> for EventError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Detached => EventError::CacheDetached,
            CacheError::UnknownMember { guild_id, user_id } => {
                EventError::MemberUnavailable { guild_id, user_id }
            }
        }
    }
}
