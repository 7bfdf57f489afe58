// Shared test helpers for integration tests
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Creates a fake cloned repository with two playbooks and one ignored file:
/// `group1/a.yml`, `group1/sub/b.yml`, `group2/c.txt`.
pub fn setup_repo_fixture() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let root = temp_dir.path();
    fs::create_dir_all(root.join("group1/sub")).expect("Failed to create group1/sub");
    fs::create_dir_all(root.join("group2")).expect("Failed to create group2");
    fs::write(root.join("group1/a.yml"), playbook_body()).expect("Failed to write a.yml");
    fs::write(root.join("group1/sub/b.yml"), playbook_body()).expect("Failed to write b.yml");
    fs::write(root.join("group2/c.txt"), "not a playbook\n").expect("Failed to write c.txt");
    temp_dir
}

/// Creates an empty fake clone.
pub fn setup_empty_fixture() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

pub fn playbook_body() -> &'static str {
    r#"---
- hosts: all
  tasks:
    - name: ping
      ping:
"#
}

/// Writes a suite configuration pointing at the given clone directory, with
/// the runner stubbed out so tests never need a real ansible-playbook binary.
pub fn write_suite_config(dir: &Path, clone_dir: &Path, runner: &str) -> PathBuf {
    let config_path = dir.join("PlaybookSuite.toml");
    let content = format!(
        r#"language = "en"
repository = "example/fixture"
clone_dir = "{}"
runner = "{}"
tester = "CI Bot"
"#,
        clone_dir.display(),
        runner
    );
    fs::write(&config_path, content).expect("Failed to write PlaybookSuite.toml");
    config_path
}
