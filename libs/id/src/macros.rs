//! Macro for defining snowflake-typed ID types.

/// Macro to define a typed snowflake ID.
///
/// This generates a newtype wrapper around `u64` with:
/// - `new()` to wrap a raw snowflake
/// - `get()` to read the raw value
/// - `timestamp_ms()` extracting the embedded creation time
/// - `parse()` with strict decimal-string parsing
/// - `Display` and `FromStr` implementations
/// - String-based `Serialize` and `Deserialize` implementations (the wire
///   carries 64-bit IDs as JSON strings)
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_snowflake!(GuildId);
/// define_snowflake!(UserId);
///
/// let guild_id = GuildId::new(175928847299117063);
/// let parsed: GuildId = "175928847299117063".parse()?;
/// ```
#[macro_export]
macro_rules! define_snowflake {
    ($name:ident) => {
        /// A typed snowflake ID for this entity kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Creates an ID from a raw snowflake value.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw snowflake value.
            #[must_use]
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// Returns the creation time embedded in the snowflake, as
            /// milliseconds since the Unix epoch.
            ///
            /// The upper 42 bits of a snowflake hold milliseconds since the
            /// platform epoch (2015-01-01T00:00:00Z).
            #[must_use]
            pub const fn timestamp_ms(&self) -> u64 {
                (self.0 >> 22) + $crate::PLATFORM_EPOCH_MS
            }

            /// Parses an ID from a decimal string.
            ///
            /// The string must consist solely of ASCII digits and fit in
            /// an unsigned 64-bit integer.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                if s.is_empty() {
                    return Err($crate::IdError::Empty);
                }

                if let Some(position) = s.bytes().position(|b| !b.is_ascii_digit()) {
                    return Err($crate::IdError::InvalidDigit {
                        input: s.to_string(),
                        position,
                    });
                }

                let raw = s
                    .parse::<u64>()
                    .map_err(|_| $crate::IdError::OutOfRange(s.to_string()))?;

                Ok(Self(raw))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
