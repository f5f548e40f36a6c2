//! # palaver-events
//!
//! Typed member field-update events.
//!
//! ## Design Principles
//!
//! - Events are immutable point-in-time records; no field ever changes
//!   after construction
//! - One generic record type covers every tracked field; which field
//!   changed is carried by the type parameter and its stable string
//!   identifier, not by a type hierarchy
//! - Absence is represented, never signaled: "no previous value" and
//!   "field not set" are `None`, not errors
//!
//! ## Snapshot semantics
//!
//! An update event derives its *new* value by querying the member
//! reference once, at construction. The event then never re-queries: it is
//! a record of what the entity looked like when the change was detected,
//! not a live view into the cache.
//!
//! ## Ordering
//!
//! Every event carries the sequence number of the upstream notification
//! that produced it. Consumers may order or deduplicate events by sequence
//! number; assigning it monotonically is the upstream dispatcher's job.

mod error;
mod event;
mod fields;
mod update;

pub use error::EventError;
pub use event::MemberEvent;
pub use fields::{
    field_idents, Avatar, BoostingSince, CommunicationDisabledUntil, Nick, Pending, TrackedField,
};
pub use update::FieldUpdate;
