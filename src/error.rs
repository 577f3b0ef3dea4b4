//! Error types for dragon-mind

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the knowledge base
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed knowledge file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KnowledgeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KnowledgeError::Parse { .. } => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            KnowledgeError::Parse { path, source } => {
                format!(
                    "Malformed knowledge file: {}\n\
                    {}\n\n\
                    Suggestions:\n\
                    • Repair the JSON by hand (a previous save may have been interrupted)\n\
                    • Move the file away to start a fresh knowledge base\n\
                    • Point DRAGON_MIND_FILE at a different file",
                    path.display(),
                    source
                )
            }
            KnowledgeError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Set DRAGON_MIND_FILE to the knowledge file path, e.g.\n\
                    export DRAGON_MIND_FILE=~/knowledge.json",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using KnowledgeError
pub type Result<T> = std::result::Result<T, KnowledgeError>;
