//! Tool discovery against real directories.

use std::path::PathBuf;
use tempfile::TempDir;
use tether::locate::{self, Tool};

#[test]
fn test_find_in_dirs_picks_earliest_directory() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    std::fs::write(first.path().join("adb"), b"").unwrap();
    std::fs::write(second.path().join("adb"), b"").unwrap();

    let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
    let found = locate::find_in_dirs("adb", &dirs).unwrap();
    assert_eq!(found, first.path().join("adb"));
}

#[test]
fn test_find_in_dirs_skips_missing_directories() {
    let present = TempDir::new().unwrap();
    std::fs::write(present.path().join("scrcpy"), b"").unwrap();

    let dirs = vec![
        PathBuf::from("/definitely/not/here"),
        present.path().to_path_buf(),
    ];
    let found = locate::find_in_dirs("scrcpy", &dirs).unwrap();
    assert_eq!(found, present.path().join("scrcpy"));
}

#[test]
fn test_conventional_dirs_shape() {
    // Tool directories are fixed by convention, wherever home happens to be.
    for dir in locate::conventional_dirs(Tool::Adb) {
        assert!(
            dir.ends_with("platform-tools"),
            "unexpected bridge dir: {}",
            dir.display()
        );
    }
    for dir in locate::conventional_dirs(Tool::Scrcpy) {
        assert!(
            dir.ends_with("scrcpy"),
            "unexpected mirror dir: {}",
            dir.display()
        );
    }
}

#[test]
fn test_not_found_error_lists_locations() {
    let dirs = locate::conventional_dirs(Tool::Adb);
    let message = locate::not_found(Tool::Adb, &dirs).to_string();
    assert!(message.contains("adb not found"));
    assert!(message.contains("execution path"));
    for dir in &dirs {
        assert!(message.contains(&dir.display().to_string()));
    }
}
