//! The generic field-update event record.

use palaver_id::{EventSeq, SessionId};
use palaver_model::MemberRef;

use crate::{EventError, TrackedField};

/// An immutable record of one member field changing value.
///
/// One generic type covers every tracked field: which field changed is
/// carried by the `F` parameter and its [`TrackedField::IDENT`] string,
/// not by a hierarchy of event types.
///
/// The record holds the field's value before the change (as reported by
/// the producer that detected it) and a snapshot of the value after the
/// change, captured from the member reference at construction time and
/// never re-queried.
///
/// Producers only construct an update when they have detected an actual
/// change, so when both sides are present they differ.
///
/// The record is immutable after construction and safe to read from any
/// number of threads at once.
#[derive(Debug, Clone)]
pub struct FieldUpdate<F: TrackedField> {
    session_id: SessionId,
    seq: EventSeq,
    member: MemberRef,
    old: Option<F::Value>,
    new: Option<F::Value>,
}

impl<F: TrackedField> FieldUpdate<F> {
    /// Constructs an update event, snapshotting the field's new value.
    ///
    /// The member reference is resolved first; a reference whose cache is
    /// gone or whose member is no longer cached is rejected here, before
    /// the field is queried. Given a resolvable reference, construction
    /// cannot fail: absent values are represented as `None`, not signaled
    /// as errors.
    ///
    /// `previous` is the field's value before the change, as observed by
    /// the producer; `None` means there was no prior value (or no prior
    /// cache entry to compare against).
    pub fn capture(
        session_id: SessionId,
        seq: EventSeq,
        member: MemberRef,
        previous: Option<F::Value>,
    ) -> Result<Self, EventError> {
        let new = member.read(F::current)?;
        Ok(Self {
            session_id,
            seq,
            member,
            old: previous,
            new,
        })
    }

    /// The field's value before the change, if any.
    #[must_use]
    pub fn old_value(&self) -> Option<&F::Value> {
        self.old.as_ref()
    }

    /// The field's value after the change, as snapshotted at
    /// construction, if any.
    #[must_use]
    pub fn new_value(&self) -> Option<&F::Value> {
        self.new.as_ref()
    }

    /// Stable string identifier of the changed field.
    #[must_use]
    pub fn field_id(&self) -> &'static str {
        F::IDENT
    }

    /// Reference to the member the event concerns.
    #[must_use]
    pub fn member(&self) -> &MemberRef {
        &self.member
    }

    /// Sequence number of the upstream notification that produced this
    /// event.
    #[must_use]
    pub fn seq(&self) -> EventSeq {
        self.seq
    }

    /// The client session that produced this event.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}
