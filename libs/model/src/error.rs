//! Error types for cache lookups.

use palaver_id::{GuildId, UserId};
use thiserror::Error;

/// Errors that can occur when resolving a member reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The cache the reference points into has been dropped.
    #[error("member cache has been dropped")]
    Detached,

    /// The member is not present in the cache.
    #[error("member {user_id} in guild {guild_id} is not cached")]
    UnknownMember { guild_id: GuildId, user_id: UserId },
}
