//! dragon-mind - Local knowledge base
//!
//! Appends timestamped entries to a single JSON store and answers substring
//! search, recency and topic queries over it.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::KnowledgeError;
