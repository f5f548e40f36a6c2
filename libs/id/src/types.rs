//! Typed ID definitions for all tracked entities.
//!
//! Platform entities use snowflake IDs. Client sessions use a locally
//! minted prefixed ULID. Event ordering uses a plain sequence counter.

use crate::define_snowflake;

/// Milliseconds between the Unix epoch and the platform epoch
/// (2015-01-01T00:00:00Z), the zero point of snowflake timestamps.
pub const PLATFORM_EPOCH_MS: u64 = 1_420_070_400_000;

// =============================================================================
// Platform Entities
// =============================================================================

define_snowflake!(GuildId);
define_snowflake!(UserId);
define_snowflake!(ChannelId);
define_snowflake!(RoleId);
define_snowflake!(ApplicationId);

// =============================================================================
// Client Sessions
// =============================================================================

/// Identifier of one client session (one established connection).
///
/// Session IDs are minted locally when a connection is opened and tag every
/// event that connection produces, so consumers can tell which session an
/// event came from. Format: `sess_{ulid}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(ulid::Ulid);

impl SessionId {
    /// The prefix for session IDs.
    pub const PREFIX: &'static str = "sess";

    /// Creates a new session ID with a fresh ULID.
    #[must_use]
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }

    /// Creates a session ID from a raw ULID.
    #[must_use]
    pub const fn from_ulid(ulid: ulid::Ulid) -> Self {
        Self(ulid)
    }

    /// Returns the underlying ULID.
    #[must_use]
    pub const fn ulid(&self) -> ulid::Ulid {
        self.0
    }

    /// Parses a session ID from a string.
    ///
    /// The string must be in the format `sess_{ulid}`.
    pub fn parse(s: &str) -> Result<Self, crate::IdError> {
        if s.is_empty() {
            return Err(crate::IdError::Empty);
        }

        let Some((prefix, ulid_str)) = s.split_once('_') else {
            return Err(crate::IdError::MissingSeparator);
        };

        if prefix != Self::PREFIX {
            return Err(crate::IdError::InvalidPrefix {
                expected: Self::PREFIX,
                actual: prefix.to_string(),
            });
        }

        let ulid = ulid_str
            .parse::<ulid::Ulid>()
            .map_err(|e| crate::IdError::InvalidUlid(e.to_string()))?;

        Ok(Self(ulid))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = crate::IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for SessionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Event Sequence Number
// =============================================================================

/// Sequence number assigned to events by the upstream event stream.
///
/// The upstream dispatcher assigns sequence numbers monotonically and
/// delivers events in that order; consumers may use the sequence number to
/// order events relative to one another or to deduplicate replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventSeq(u64);

impl EventSeq {
    /// The sequence number before any event has been received.
    pub const ZERO: Self = Self(0);

    /// Creates an EventSeq from a u64.
    #[must_use]
    pub const fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// Returns the underlying u64 value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the next sequence number.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for EventSeq {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for EventSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventSeq {
    fn from(seq: u64) -> Self {
        Self(seq)
    }
}

impl From<EventSeq> for u64 {
    fn from(seq: EventSeq) -> Self {
        seq.0
    }
}

impl serde::Serialize for EventSeq {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EventSeq {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seq = u64::deserialize(deserializer)?;
        Ok(Self(seq))
    }
}

// =============================================================================
// Tests
// =============================================================================
