//! Search use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::KnowledgeStore;

/// Service for case-insensitive substring search over topic and content
pub struct SearchService {
    store: KnowledgeStore,
}

impl SearchService {
    /// Create a new search service
    pub fn new(store: KnowledgeStore) -> Self {
        SearchService { store }
    }

    /// Matching entries in storage order. An empty term returns everything.
    pub fn execute(&self, term: &str) -> Result<Vec<Entry>> {
        Ok(self.store.load()?.search(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AddEntryService;
    use tempfile::TempDir;

    #[test]
    fn test_search_after_add() {
        let temp = TempDir::new().unwrap();
        let store = KnowledgeStore::new(temp.path().join("knowledge.json"));
        let add = AddEntryService::new(store.clone());
        add.execute("Dragons", "fire", None, None).unwrap();
        add.execute("elves", "pointy ears", None, None).unwrap();

        let search = SearchService::new(store);
        assert_eq!(search.execute("dragon").unwrap().len(), 1);
        assert_eq!(search.execute("DRAGON").unwrap()[0].content, "fire");
        assert_eq!(search.execute("").unwrap().len(), 2);
        assert!(search.execute("gold").unwrap().is_empty());
    }

    #[test]
    fn test_search_missing_store_is_empty() {
        let temp = TempDir::new().unwrap();
        let search = SearchService::new(KnowledgeStore::new(temp.path().join("knowledge.json")));

        assert!(search.execute("anything").unwrap().is_empty());
    }
}
