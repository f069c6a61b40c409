
use std::path::PathBuf;

use tempfile::TempDir;

pub(crate) const CLAIMS_JSON: &str = r#"{
    "sub": "1234",
    "is_guest": false,
    "signature": "5f4dcc3b",
    "preferred_username": "jdoe.5f4d",
    "email": "jane@example.org"
}"#;

/// Write a file into the temp dir and return its path
pub(crate) fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
