//! Domain layer - Knowledge model and queries

pub mod entry;
pub mod knowledge;

pub use entry::{Entry, DEFAULT_CONTRIBUTOR, DEFAULT_SOURCE};
pub use knowledge::{KnowledgeBase, Meta};
