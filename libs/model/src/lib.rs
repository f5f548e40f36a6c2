//! # palaver-model
//!
//! Guild member entity model and the in-memory entity cache.
//!
//! ## Design Principles
//!
//! - Entities are plain data in the wire shape; the cache owns them
//! - Everything handed out of the cache is a clone, never an alias
//! - References into the cache are weak: lookup only, no ownership
//!
//! The cache exists so that update events can be produced at all: the wire
//! only carries the *current* member object, so firing a "field changed
//! from A to B" event requires the previous member to still be cached to
//! compare against.

mod cache;
mod error;
mod member;

pub use cache::{MemberCache, MemberRef};
pub use error::CacheError;
pub use member::Member;
