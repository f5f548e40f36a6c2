//! # palaver-id
//!
//! Typed ID types, parsing, and validation for the palaver client.
//!
//! ## Design Principles
//!
//! - IDs are stable and platform-assigned; display names are user-controlled labels
//! - All IDs have a canonical string representation with strict parsing
//! - IDs support roundtrip serialization (parse → format → parse)
//! - IDs are typed to prevent mixing different entity kinds
//!
//! ## ID Formats
//!
//! Platform entities (guilds, users, channels, roles) use **snowflakes**:
//! 64-bit integers with an embedded millisecond timestamp, carried on the
//! wire as decimal strings so they survive clients that parse JSON numbers
//! as doubles.
//!
//! Examples:
//! - `guild: "175928847299117063"`
//! - `user: "80351110224678912"`
//!
//! Client sessions use a prefixed ULID format: `sess_{ulid}`. A session ID
//! is minted locally when a connection is established and tags every event
//! that connection produces.

mod error;
mod macros;
mod types;

pub use error::IdError;
pub use types::*;

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
