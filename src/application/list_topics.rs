//! List topics use case

use crate::error::Result;
use crate::infrastructure::KnowledgeStore;

/// Service for listing distinct topics
pub struct ListTopicsService {
    store: KnowledgeStore,
}

impl ListTopicsService {
    /// Create a new list topics service
    pub fn new(store: KnowledgeStore) -> Self {
        ListTopicsService { store }
    }

    /// Distinct topics in order of first appearance
    pub fn execute(&self) -> Result<Vec<String>> {
        Ok(self.store.load()?.topics())
    }
}
