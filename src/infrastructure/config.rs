//! Knowledge file location

use crate::error::{KnowledgeError, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the knowledge file path
pub const STORE_FILE_ENV: &str = "DRAGON_MIND_FILE";

/// File name of the knowledge store
pub const STORE_FILE_NAME: &str = "knowledge.json";

/// Resolve the knowledge file path.
/// First checks DRAGON_MIND_FILE, then falls back to the installation layout.
pub fn resolve_store_path() -> Result<PathBuf> {
    if let Some(path) = path_from_env(std::env::var(STORE_FILE_ENV).ok()) {
        return Ok(path);
    }

    let exe = std::env::current_exe().map_err(|e| {
        KnowledgeError::Config(format!("Cannot locate the running executable: {}", e))
    })?;
    default_store_path(&exe)
}

fn path_from_env(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

/// `knowledge.json` next to the directory that holds the executable,
/// e.g. `/opt/dragon-mind/bin/dragon-mind` -> `/opt/dragon-mind/knowledge.json`.
pub fn default_store_path(exe: &Path) -> Result<PathBuf> {
    let bin_dir = exe.parent().ok_or_else(|| {
        KnowledgeError::Config(format!(
            "Executable path has no parent directory: {}",
            exe.display()
        ))
    })?;
    let install_dir = bin_dir.parent().unwrap_or(bin_dir);
    Ok(install_dir.join(STORE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_path_is_sibling_of_bin_dir() {
        let path = default_store_path(Path::new("/opt/dragon-mind/bin/dragon-mind")).unwrap();
        assert_eq!(path, PathBuf::from("/opt/dragon-mind/knowledge.json"));
    }

    #[test]
    fn test_default_store_path_at_filesystem_root() {
        let path = default_store_path(Path::new("/dragon-mind")).unwrap();
        assert_eq!(path, PathBuf::from("/knowledge.json"));
    }

    #[test]
    fn test_default_store_path_without_parent() {
        assert!(default_store_path(Path::new("")).is_err());
    }

    #[test]
    fn test_env_override() {
        assert_eq!(
            path_from_env(Some("/tmp/kb.json".to_string())),
            Some(PathBuf::from("/tmp/kb.json"))
        );
        assert_eq!(path_from_env(Some("  ".to_string())), None);
        assert_eq!(path_from_env(None), None);
    }
}
