//! The guild member entity.

use chrono::{DateTime, Utc};
use palaver_id::{GuildId, RoleId, UserId};
use serde::{Deserialize, Serialize};

/// A member of a guild, in the wire shape.
///
/// Optional timestamps mean "not set": a member with no
/// `communication_disabled_until` is not timed out, a member with no
/// `boosting_since` is not boosting. The wire may send such fields as
/// `null` or omit them entirely; both deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub guild_id: GuildId,
    pub user_id: UserId,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleId>,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub boosting_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub communication_disabled_until: Option<DateTime<Utc>>,
}

impl Member {
    /// Whether the member is timed out at the given instant.
    ///
    /// A timeout in the past is stale: the platform does not send a
    /// follow-up update when a timeout expires, so the timestamp can
    /// linger after the member can speak again.
    #[must_use]
    pub fn is_timed_out(&self, now: DateTime<Utc>) -> bool {
        self.communication_disabled_until
            .is_some_and(|until| until > now)
    }

    /// The display name: nickname if set, otherwise none.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nick.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wire_member(extra: &str) -> Member {
        let json = format!(
            r#"{{
                "guild_id": "175928847299117063",
                "user_id": "80351110224678912",
                "joined_at": "2021-03-01T10:00:00Z"
                {extra}
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_member_minimal_wire_shape() {
        let member = wire_member("");
        assert_eq!(member.guild_id, GuildId::new(175_928_847_299_117_063));
        assert_eq!(member.user_id, UserId::new(80_351_110_224_678_912));
        assert_eq!(member.nick, None);
        assert!(member.roles.is_empty());
        assert!(!member.pending);
        assert_eq!(member.communication_disabled_until, None);
    }

    #[test]
    fn test_member_null_timeout_deserializes_to_none() {
        let member = wire_member(r#", "communication_disabled_until": null"#);
        assert_eq!(member.communication_disabled_until, None);
    }

    #[test]
    fn test_member_timeout_preserved() {
        let member = wire_member(r#", "communication_disabled_until": "2021-03-02T12:30:45Z""#);
        let expected = Utc.with_ymd_and_hms(2021, 3, 2, 12, 30, 45).unwrap();
        assert_eq!(member.communication_disabled_until, Some(expected));
    }

    #[test]
    fn test_is_timed_out() {
        let until = Utc.with_ymd_and_hms(2021, 3, 2, 12, 0, 0).unwrap();
        let mut member = wire_member("");
        member.communication_disabled_until = Some(until);

        let before = Utc.with_ymd_and_hms(2021, 3, 2, 11, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2021, 3, 2, 13, 0, 0).unwrap();
        assert!(member.is_timed_out(before));
        assert!(!member.is_timed_out(after));
        assert!(!member.is_timed_out(until));
    }

    #[test]
    fn test_is_timed_out_without_timestamp() {
        let member = wire_member("");
        assert!(!member.is_timed_out(Utc::now()));
    }

    #[test]
    fn test_member_roles_parse_as_strings() {
        let member = wire_member(r#", "roles": ["41771983423143936", "41771983423143937"]"#);
        assert_eq!(
            member.roles,
            vec![
                RoleId::new(41_771_983_423_143_936),
                RoleId::new(41_771_983_423_143_937)
            ]
        );
    }
}
