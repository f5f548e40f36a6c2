//! In-memory member cache and weak member references.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use palaver_id::{GuildId, UserId};

use crate::{CacheError, Member};

type MemberMap = HashMap<(GuildId, UserId), Member>;

/// In-memory cache of guild members, keyed by `(guild, user)`.
///
/// Writes come from the single dispatch thread that processes upstream
/// updates; reads may come from any thread. Everything handed out is a
/// clone of the cached entry.
#[derive(Debug, Default)]
pub struct MemberCache {
    inner: Arc<RwLock<MemberMap>>,
}

impl MemberCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a member, returning the previous entry if one
    /// was cached.
    pub fn insert(&self, member: Member) -> Option<Member> {
        let key = (member.guild_id, member.user_id);
        self.write_lock().insert(key, member)
    }

    /// Returns a clone of the cached member, if present.
    #[must_use]
    pub fn get(&self, guild_id: GuildId, user_id: UserId) -> Option<Member> {
        self.read_lock().get(&(guild_id, user_id)).cloned()
    }

    /// Removes a member from the cache, returning the evicted entry.
    pub fn remove(&self, guild_id: GuildId, user_id: UserId) -> Option<Member> {
        self.write_lock().remove(&(guild_id, user_id))
    }

    /// Returns a weak reference to a member slot.
    ///
    /// The reference does not keep the cache alive and does not require
    /// the member to be cached yet; resolution happens on each lookup.
    #[must_use]
    pub fn member_ref(&self, guild_id: GuildId, user_id: UserId) -> MemberRef {
        MemberRef {
            inner: Arc::downgrade(&self.inner),
            guild_id,
            user_id,
        }
    }

    /// Number of cached members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, MemberMap> {
        // A poisoned lock only means a reader or writer panicked; the map
        // itself is still consistent, so recover the guard.
        match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, MemberMap> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// A weak handle to one member slot in a [`MemberCache`].
///
/// Lookup only, no ownership: holding a `MemberRef` neither keeps the
/// cache alive nor pins the member in it. Every resolution re-reads the
/// cache, so two `read` calls may observe different states if the cache
/// was updated in between.
#[derive(Debug, Clone)]
pub struct MemberRef {
    inner: Weak<RwLock<MemberMap>>,
    guild_id: GuildId,
    user_id: UserId,
}

impl MemberRef {
    /// The guild this reference points into.
    #[must_use]
    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// The user this reference points at.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Resolves the member and applies `f` to it under the cache lock.
    ///
    /// Fails with [`CacheError::Detached`] if the cache has been dropped,
    /// or [`CacheError::UnknownMember`] if the member is not cached.
    pub fn read<R>(&self, f: impl FnOnce(&Member) -> R) -> Result<R, CacheError> {
        let Some(inner) = self.inner.upgrade() else {
            return Err(CacheError::Detached);
        };
        let guard = match inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let member = guard
            .get(&(self.guild_id, self.user_id))
            .ok_or(CacheError::UnknownMember {
                guild_id: self.guild_id,
                user_id: self.user_id,
            })?;
        Ok(f(member))
    }

    /// Returns a clone of the current cached member.
    pub fn snapshot(&self) -> Result<Member, CacheError> {
        self.read(Member::clone)
    }
}
