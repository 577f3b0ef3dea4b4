//! Recent entries use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::KnowledgeStore;

/// Window size used when no usable limit is given
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Interpret a textual limit from its leading digits (`"5x"` and `"2.5"` give
/// 5 and 2). Absent, non-numeric, zero or negative values fall back to the
/// default; values too large for `usize` mean "everything".
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(leading_number)
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_RECENT_LIMIT)
}

fn leading_number(raw: &str) -> Option<usize> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}

/// Service for listing the most recently added entries
pub struct RecentService {
    store: KnowledgeStore,
}

impl RecentService {
    /// Create a new recent entries service
    pub fn new(store: KnowledgeStore) -> Self {
        RecentService { store }
    }

    /// The last `limit` entries, oldest of the window first
    pub fn execute(&self, limit: usize) -> Result<Vec<Entry>> {
        Ok(self.store.load()?.recent(limit))
    }
}
