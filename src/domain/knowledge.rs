//! Knowledge base aggregate and its queries

use super::entry::{serialize_timestamp, to_base36, Entry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Store metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(serialize_with = "serialize_timestamp")]
    pub created: DateTime<Utc>,
    pub contributors: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The whole persisted document: entries in append order plus metadata.
/// Keys this crate does not know are carried through load and save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub entries: Vec<Entry>,
    pub meta: Meta,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base created at `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        KnowledgeBase {
            entries: Vec::new(),
            meta: Meta {
                created: now,
                contributors: Vec::new(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry and record its contributor if unseen.
    ///
    /// The id is the base-36 creation millisecond; if another entry in this
    /// store already holds it, the millisecond is bumped until it is free.
    pub fn append(
        &mut self,
        topic: &str,
        content: &str,
        source: &str,
        contributor: &str,
        now: DateTime<Utc>,
    ) -> Entry {
        let mut entry = Entry::new(topic, content, source, contributor, now);
        entry.id = self.unused_id(now);

        if !self.meta.contributors.contains(&entry.contributor) {
            self.meta.contributors.push(entry.contributor.clone());
        }
        self.entries.push(entry.clone());
        entry
    }

    fn unused_id(&self, now: DateTime<Utc>) -> String {
        let taken: HashSet<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
        let mut millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        loop {
            let id = to_base36(millis);
            if !taken.contains(id.as_str()) {
                return id;
            }
            millis += 1;
        }
    }

    /// Entries whose topic or content contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<Entry> {
        let folded = term.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.matches(&folded))
            .cloned()
            .collect()
    }

    /// The last `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<Entry> {
        let start = self.entries.len().saturating_sub(limit);
        self.entries[start..].to_vec()
    }

    /// Distinct topics in order of first appearance
    pub fn topics(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut topics = Vec::new();
        for entry in &self.entries {
            if seen.insert(entry.topic.as_str()) {
                topics.push(entry.topic.clone());
            }
        }
        topics
    }

    pub fn contributors(&self) -> &[String] {
        &self.meta.contributors
    }
}
