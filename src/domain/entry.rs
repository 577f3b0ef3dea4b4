//! Knowledge entry model

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Source recorded when none is given
pub const DEFAULT_SOURCE: &str = "cli";

/// Contributor recorded when none is given
pub const DEFAULT_CONTRIBUTOR: &str = "unknown";

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One knowledge record.
///
/// Stores written by other tools may omit string fields or carry extra keys;
/// missing strings load as empty and unknown keys are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub contributor: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Build an entry created at `now`.
    /// Empty `source` and `contributor` fall back to their defaults.
    pub fn new(
        topic: &str,
        content: &str,
        source: &str,
        contributor: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Entry {
            id: entry_id(now),
            topic: topic.to_string(),
            content: content.to_string(),
            source: or_default(source, DEFAULT_SOURCE),
            contributor: or_default(contributor, DEFAULT_CONTRIBUTOR),
            timestamp: now,
            extra: Map::new(),
        }
    }

    /// Case-insensitive substring test against topic and content.
    /// `folded_term` must already be lowercased.
    pub fn matches(&self, folded_term: &str) -> bool {
        self.topic.to_lowercase().contains(folded_term)
            || self.content.to_lowercase().contains(folded_term)
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Entry id for a creation instant: epoch milliseconds in lowercase base 36.
pub fn entry_id(now: DateTime<Utc>) -> String {
    to_base36(u64::try_from(now.timestamp_millis()).unwrap_or(0))
}

pub(crate) fn to_base36(mut value: u64) -> String {
    let mut digits = String::new();
    loop {
        digits.push(char::from(BASE36_DIGITS[(value % 36) as usize]));
        value /= 36;
        if value == 0 {
            break;
        }
    }
    digits.chars().rev().collect()
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn test_entry_id_is_base36_millis() {
        assert_eq!(entry_id(fixed_time()), "loyw3v28");
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }

    #[test]
    fn test_new_entry_keeps_inputs() {
        let entry = Entry::new("dragons", "they breathe fire", "book", "alice", fixed_time());
        assert_eq!(entry.id, "loyw3v28");
        assert_eq!(entry.topic, "dragons");
        assert_eq!(entry.content, "they breathe fire");
        assert_eq!(entry.source, "book");
        assert_eq!(entry.contributor, "alice");
        assert_eq!(entry.timestamp, fixed_time());
    }

    #[test]
    fn test_new_entry_applies_defaults() {
        let entry = Entry::new("t", "c", "", "", fixed_time());
        assert_eq!(entry.source, DEFAULT_SOURCE);
        assert_eq!(entry.contributor, DEFAULT_CONTRIBUTOR);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let entry = Entry::new("Dragons", "Fire", "", "", fixed_time());
        assert!(entry.matches("dragon"));
        assert!(entry.matches("fire"));
        assert!(entry.matches(""));
        assert!(!entry.matches("gold"));
    }

    #[test]
    fn test_timestamp_serialized_with_millis() {
        let entry = Entry::new("t", "c", "s", "a", fixed_time());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_deserialize_stored_entry() {
        let json = r#"{
            "id": "loyw3v28",
            "topic": "dragons",
            "content": "they hoard gold",
            "source": "wiki",
            "contributor": "bob",
            "timestamp": "2023-11-14T22:13:20.000Z"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.contributor, "bob");
        assert_eq!(entry.timestamp, fixed_time());
        assert!(entry.extra.is_empty());
    }

    #[test]
    fn test_deserialize_entry_with_missing_strings() {
        let json = r#"{
            "id": "loyw3v28",
            "topic": "dragons",
            "timestamp": "2023-11-14T22:13:20.000Z"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.topic, "dragons");
        assert_eq!(entry.content, "");
        assert_eq!(entry.source, "");
        assert_eq!(entry.contributor, "");
    }

    #[test]
    fn test_unknown_entry_keys_survive_reserialization() {
        let json = r#"{
            "id": "loyw3v28",
            "topic": "dragons",
            "content": "fire",
            "source": "book",
            "contributor": "alice",
            "timestamp": "2023-11-14T22:13:20.000Z",
            "tags": ["lore"]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.extra["tags"], serde_json::json!(["lore"]));

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["tags"], serde_json::json!(["lore"]));
        assert_eq!(value["content"], "fire");
    }
}
