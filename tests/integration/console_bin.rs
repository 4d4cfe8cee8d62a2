//! Console binary startup behavior.

use std::process::{Command, Stdio};
use tempfile::TempDir;

#[test]
fn test_help_flag_prints_about() {
    let bin = env!("CARGO_BIN_EXE_tether");
    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Interactive console for Android devices"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn test_missing_bridge_is_fatal_at_startup() {
    let temp = TempDir::new().unwrap();
    let empty_path = temp.path().join("bin");
    let home = temp.path().join("home");
    std::fs::create_dir_all(&empty_path).unwrap();
    std::fs::create_dir_all(&home).unwrap();

    let bin = env!("CARGO_BIN_EXE_tether");
    let output = Command::new(bin)
        .env("PATH", empty_path.as_os_str())
        .env("HOME", home.as_os_str())
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("adb not found"), "stderr: {}", stderr);
}

#[test]
fn test_bridge_in_conventional_directory_is_found_at_startup() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let empty_path = temp.path().join("bin");
    let home = temp.path().join("home");
    let tool_dir = home.join(".tether").join("platform-tools");
    std::fs::create_dir_all(&empty_path).unwrap();
    std::fs::create_dir_all(&tool_dir).unwrap();

    let bridge = tool_dir.join("adb");
    std::fs::write(&bridge, "#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&bridge, std::fs::Permissions::from_mode(0o755)).unwrap();

    let bin = env!("CARGO_BIN_EXE_tether");
    let output = Command::new(bin)
        .env("PATH", empty_path.as_os_str())
        .env("HOME", home.as_os_str())
        .stdin(Stdio::null())
        .output()
        .unwrap();

    // The bridge off the search path must resolve; what ends this run is the
    // closed prompt, not the locator.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("adb not found"), "stderr: {}", stderr);
    assert!(stderr.contains("could not read input"), "stderr: {}", stderr);
}
