//! JSON file store

use crate::domain::KnowledgeBase;
use crate::error::{KnowledgeError, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Single-file knowledge store.
///
/// Holds no state besides its path: every `load` reads the file again and
/// every `save` rewrites it in full. Writers in separate processes are not
/// coordinated, so two overlapping load/append/save cycles lose one update.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    path: PathBuf,
}

impl KnowledgeStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        KnowledgeStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the knowledge base.
    /// A missing file yields a fresh, unsaved knowledge base.
    pub fn load(&self) -> Result<KnowledgeBase> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "knowledge file absent, starting fresh");
                return Ok(KnowledgeBase::new(Utc::now()));
            }
            Err(e) => return Err(KnowledgeError::Io(e)),
        };

        let kb: KnowledgeBase =
            serde_json::from_str(&contents).map_err(|source| KnowledgeError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), entries = kb.len(), "loaded knowledge file");
        Ok(kb)
    }

    /// Overwrite the backing file with the pretty-printed knowledge base.
    /// Not atomic: a crash mid-write leaves a truncated file behind.
    pub fn save(&self, kb: &KnowledgeBase) -> Result<()> {
        let contents = serde_json::to_string_pretty(kb).map_err(KnowledgeError::Serialize)?;

        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, contents)?;

        debug!(path = %self.path.display(), entries = kb.len(), "saved knowledge file");
        Ok(())
    }
}
