//! Application layer - Use cases over the knowledge store

pub mod add_entry;
pub mod contributors;
pub mod list_topics;
pub mod recent;
pub mod search;

pub use add_entry::AddEntryService;
pub use contributors::ContributorsService;
pub use list_topics::ListTopicsService;
pub use recent::{parse_limit, RecentService, DEFAULT_RECENT_LIMIT};
pub use search::SearchService;
