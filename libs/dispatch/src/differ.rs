//! Diffs incoming member objects against the cache.

use palaver_events::{
    Avatar, BoostingSince, CommunicationDisabledUntil, EventError, FieldUpdate, MemberEvent, Nick,
    Pending, TrackedField,
};
use palaver_id::{EventSeq, SessionId};
use palaver_model::{Member, MemberCache, MemberRef};
use tracing::debug;

/// Detects per-field changes in member updates and constructs the
/// corresponding events.
///
/// The differ carries the session ID of the connection it serves; every
/// event it constructs is tagged with it.
#[derive(Debug, Clone)]
pub struct MemberUpdateDiffer {
    session_id: SessionId,
}

impl MemberUpdateDiffer {
    /// Creates a differ for one client session.
    #[must_use]
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }

    /// The session this differ tags events with.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Applies an incoming member object to the cache and returns one
    /// event per field that changed.
    ///
    /// The cache is updated first; events then snapshot their new values
    /// from the updated entry. All events from one call carry the same
    /// sequence number. A member seen for the first time updates the
    /// cache but yields no events.
    pub fn apply(
        &self,
        cache: &MemberCache,
        seq: EventSeq,
        incoming: Member,
    ) -> Result<Vec<MemberEvent>, EventError> {
        let guild_id = incoming.guild_id;
        let user_id = incoming.user_id;

        let Some(previous) = cache.insert(incoming) else {
            debug!(
                guild = %guild_id,
                user = %user_id,
                "first sight of member, nothing to diff"
            );
            return Ok(Vec::new());
        };

        let member_ref = cache.member_ref(guild_id, user_id);
        let mut events = Vec::new();
        self.diff_field::<Nick>(&previous, &member_ref, seq, &mut events)?;
        self.diff_field::<Avatar>(&previous, &member_ref, seq, &mut events)?;
        self.diff_field::<BoostingSince>(&previous, &member_ref, seq, &mut events)?;
        self.diff_field::<Pending>(&previous, &member_ref, seq, &mut events)?;
        self.diff_field::<CommunicationDisabledUntil>(&previous, &member_ref, seq, &mut events)?;
        Ok(events)
    }

    fn diff_field<F>(
        &self,
        previous: &Member,
        member_ref: &MemberRef,
        seq: EventSeq,
        events: &mut Vec<MemberEvent>,
    ) -> Result<(), EventError>
    where
        F: TrackedField,
        MemberEvent: From<FieldUpdate<F>>,
    {
        let old = F::current(previous);
        let current = member_ref.read(F::current)?;
        if old == current {
            return Ok(());
        }

        let update = FieldUpdate::<F>::capture(self.session_id, seq, member_ref.clone(), old)?;
        debug!(field = F::IDENT, seq = seq.value(), "member field changed");
        events.push(update.into());
        Ok(())
    }
}
