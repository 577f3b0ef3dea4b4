//! Infrastructure layer - File persistence and path configuration

pub mod config;
pub mod store;

pub use config::{resolve_store_path, STORE_FILE_ENV, STORE_FILE_NAME};
pub use store::KnowledgeStore;
