use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub fn knowledge_file(dir: &Path) -> PathBuf {
    dir.join("knowledge.json")
}

pub fn dragon_mind_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dragon-mind").unwrap();
    cmd.env("DRAGON_MIND_FILE", knowledge_file(dir));
    cmd.env_remove("RUST_LOG");
    cmd
}
