//! Add entry use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::KnowledgeStore;
use chrono::Utc;
use tracing::info;

/// Service for appending knowledge entries
pub struct AddEntryService {
    store: KnowledgeStore,
}

impl AddEntryService {
    /// Create a new add entry service
    pub fn new(store: KnowledgeStore) -> Self {
        AddEntryService { store }
    }

    /// Append an entry and persist the store.
    /// Missing or empty `source`/`contributor` fall back to `cli`/`unknown`.
    pub fn execute(
        &self,
        topic: &str,
        content: &str,
        source: Option<&str>,
        contributor: Option<&str>,
    ) -> Result<Entry> {
        let mut kb = self.store.load()?;

        let entry = kb.append(
            topic,
            content,
            source.unwrap_or_default(),
            contributor.unwrap_or_default(),
            Utc::now(),
        );

        self.store.save(&kb)?;

        info!(id = %entry.id, topic = %entry.topic, "added entry");
        Ok(entry)
    }
}
