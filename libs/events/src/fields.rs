//! Tracked member fields and their stable identifiers.
//!
//! Each diffable member attribute gets a zero-sized marker type tying
//! together its value type, its identifier string, and how to read it off
//! a [`Member`]. Update events are generic over these markers.

use chrono::{DateTime, Utc};
use palaver_model::Member;

/// All field identifier strings as constants.
///
/// Identifiers are used for dispatch routing and diagnostics and never
/// change once published.
pub mod field_idents {
    pub const NICK: &str = "nick";
    pub const AVATAR: &str = "avatar";
    pub const BOOSTING_SINCE: &str = "boosting_since";
    pub const PENDING: &str = "pending";
    pub const COMMUNICATION_DISABLED_UNTIL: &str = "communication_disabled_until";
}

/// A member attribute that update events can be fired for.
///
/// `current` reads the attribute off a member as it is *now*; the event
/// layer calls it exactly once per event, at construction.
pub trait TrackedField {
    /// The attribute's value type.
    type Value: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static;

    /// Stable string identifier for the attribute.
    const IDENT: &'static str;

    /// Reads the attribute's current value. `None` means the attribute is
    /// not set.
    fn current(member: &Member) -> Option<Self::Value>;
}

/// The member's per-guild nickname.
#[derive(Debug, Clone, Copy)]
pub struct Nick;

impl TrackedField for Nick {
    type Value = String;
    const IDENT: &'static str = field_idents::NICK;

    fn current(member: &Member) -> Option<String> {
        member.nick.clone()
    }
}

/// The member's per-guild avatar hash.
#[derive(Debug, Clone, Copy)]
pub struct Avatar;

impl TrackedField for Avatar {
    type Value = String;
    const IDENT: &'static str = field_idents::AVATAR;

    fn current(member: &Member) -> Option<String> {
        member.avatar.clone()
    }
}

/// When the member started boosting the guild.
#[derive(Debug, Clone, Copy)]
pub struct BoostingSince;

impl TrackedField for BoostingSince {
    type Value = DateTime<Utc>;
    const IDENT: &'static str = field_idents::BOOSTING_SINCE;

    fn current(member: &Member) -> Option<DateTime<Utc>> {
        member.boosting_since
    }
}

/// Whether the member still has to pass membership screening.
///
/// The flag always has a value, so both sides of a pending update are
/// `Some`.
#[derive(Debug, Clone, Copy)]
pub struct Pending;

impl TrackedField for Pending {
    type Value = bool;
    const IDENT: &'static str = field_idents::PENDING;

    fn current(member: &Member) -> Option<bool> {
        Some(member.pending)
    }
}

/// Until when the member's communication is disabled (the timeout).
///
/// `None` means the member is not timed out.
#[derive(Debug, Clone, Copy)]
pub struct CommunicationDisabledUntil;

impl TrackedField for CommunicationDisabledUntil {
    type Value = DateTime<Utc>;
    const IDENT: &'static str = field_idents::COMMUNICATION_DISABLED_UNTIL;

    fn current(member: &Member) -> Option<DateTime<Utc>> {
        member.communication_disabled_until
    }
}
