//! The union of member update events, the currency of dispatch.

use palaver_id::{EventSeq, GuildId, SessionId, UserId};
use palaver_model::MemberRef;

use crate::fields::{Avatar, BoostingSince, CommunicationDisabledUntil, Nick, Pending};
use crate::update::FieldUpdate;

/// Any member field-update event.
///
/// One variant per tracked field, each wrapping the generic record for
/// that field. Listeners route on [`MemberEvent::field_id`].
#[derive(Debug, Clone)]
pub enum MemberEvent {
    /// The nickname changed.
    NickChanged(FieldUpdate<Nick>),
    /// The per-guild avatar changed.
    AvatarChanged(FieldUpdate<Avatar>),
    /// The member started or stopped boosting.
    BoostChanged(FieldUpdate<BoostingSince>),
    /// The member passed (or re-entered) membership screening.
    PendingChanged(FieldUpdate<Pending>),
    /// The member was timed out, had the timeout changed, or had it
    /// lifted.
    TimeoutChanged(FieldUpdate<CommunicationDisabledUntil>),
}

impl MemberEvent {
    /// Stable string identifier of the changed field.
    #[must_use]
    pub fn field_id(&self) -> &'static str {
        match self {
            MemberEvent::NickChanged(e) => e.field_id(),
            MemberEvent::AvatarChanged(e) => e.field_id(),
            MemberEvent::BoostChanged(e) => e.field_id(),
            MemberEvent::PendingChanged(e) => e.field_id(),
            MemberEvent::TimeoutChanged(e) => e.field_id(),
        }
    }

    /// Sequence number of the upstream notification.
    #[must_use]
    pub fn seq(&self) -> EventSeq {
        match self {
            MemberEvent::NickChanged(e) => e.seq(),
            MemberEvent::AvatarChanged(e) => e.seq(),
            MemberEvent::BoostChanged(e) => e.seq(),
            MemberEvent::PendingChanged(e) => e.seq(),
            MemberEvent::TimeoutChanged(e) => e.seq(),
        }
    }

    /// The client session that produced the event.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        match self {
            MemberEvent::NickChanged(e) => e.session_id(),
            MemberEvent::AvatarChanged(e) => e.session_id(),
            MemberEvent::BoostChanged(e) => e.session_id(),
            MemberEvent::PendingChanged(e) => e.session_id(),
            MemberEvent::TimeoutChanged(e) => e.session_id(),
        }
    }

    /// Reference to the member the event concerns.
    #[must_use]
    pub fn member(&self) -> &MemberRef {
        match self {
            MemberEvent::NickChanged(e) => e.member(),
            MemberEvent::AvatarChanged(e) => e.member(),
            MemberEvent::BoostChanged(e) => e.member(),
            MemberEvent::PendingChanged(e) => e.member(),
            MemberEvent::TimeoutChanged(e) => e.member(),
        }
    }

    /// The guild the event happened in.
    #[must_use]
    pub fn guild_id(&self) -> GuildId {
        self.member().guild_id()
    }

    /// The user the event concerns.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.member().user_id()
    }
}

impl From<FieldUpdate<Nick>> for MemberEvent {
    fn from(update: FieldUpdate<Nick>) -> Self {
        MemberEvent::NickChanged(update)
    }
}

impl From<FieldUpdate<Avatar>> for MemberEvent {
    fn from(update: FieldUpdate<Avatar>) -> Self {
        MemberEvent::AvatarChanged(update)
    }
}

impl From<FieldUpdate<BoostingSince>> for MemberEvent {
    fn from(update: FieldUpdate<BoostingSince>) -> Self {
        MemberEvent::BoostChanged(update)
    }
}

impl From<FieldUpdate<Pending>> for MemberEvent {
    fn from(update: FieldUpdate<Pending>) -> Self {
        MemberEvent::PendingChanged(update)
    }
}

impl From<FieldUpdate<CommunicationDisabledUntil>> for MemberEvent {
    fn from(update: FieldUpdate<CommunicationDisabledUntil>) -> Self {
        MemberEvent::TimeoutChanged(update)
    }
}
