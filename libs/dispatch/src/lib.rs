//! # palaver-dispatch
//!
//! Member update diffing and listener dispatch.
//!
//! This crate is the producer side of the event model: it takes member
//! objects as the upstream connection hands them over, compares them
//! against the cached previous state, constructs one update event per
//! changed field, and delivers the events to registered listeners.
//!
//! The upstream only says "this member was updated" and sends the whole
//! updated object; it does not say what changed. Diffing against the cache
//! is the only way to find out, which is why a member seen for the first
//! time produces no events: there is nothing to compare against.
//!
//! ## Threading
//!
//! One dispatch thread drives the pipeline; listeners are invoked
//! sequentially on that thread, in registration order. The events handed
//! to listeners are immutable and may be cloned out and read from other
//! threads freely.

mod differ;
mod pipeline;
mod registry;

pub use differ::MemberUpdateDiffer;
pub use pipeline::UpdatePipeline;
pub use registry::{Dispatcher, EventListener};
