//! List contributors use case

use crate::error::Result;
use crate::infrastructure::KnowledgeStore;

/// Service for reading the contributor set
pub struct ContributorsService {
    store: KnowledgeStore,
}

impl ContributorsService {
    pub fn new(store: KnowledgeStore) -> Self {
        ContributorsService { store }
    }

    /// Contributors in the order they were first recorded
    pub fn execute(&self) -> Result<Vec<String>> {
        Ok(self.store.load()?.meta.contributors)
    }
}
