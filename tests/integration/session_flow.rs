//! Session handlers driving a fake bridge executable.
//!
//! The fake is a shell script that records its argument vector and answers
//! like the real tool, so these tests cover the full path from handler to
//! spawned process without a device attached.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tether::error::BridgeError;
use tether::runner::ProcessRunner;
use tether::session::{MirrorOutcome, Session};

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// Fake bridge: records every invocation to `log` and answers the
/// subcommands the tests exercise.
fn fake_bridge(dir: &Path, log: &Path, ready_device: bool) -> PathBuf {
    let listing = if ready_device {
        r"printf 'List of devices attached\nemulator-5554\tdevice\n'"
    } else {
        r"printf 'List of devices attached\n192.168.1.10:5555\tunauthorized\n'"
    };
    let body = format!(
        r#"echo "$@" >> "{log}"
case "$1" in
  devices) {listing} ;;
  pair) echo "Successfully paired to $2 [guid=adb-RFCX123]" ;;
  connect) echo "connected to $2" ;;
esac"#,
        log = log.display(),
        listing = listing,
    );
    write_script(dir, "adb", &body)
}

#[test]
fn test_pair_then_connect_flow() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let bridge = fake_bridge(dir.path(), &log, true);
    let session = Session::new(bridge, None, ProcessRunner::new());

    let outcome = session.pair("192.168.1.10:37123", "123456").unwrap();

    assert!(outcome.pair.succeeded);
    assert!(outcome.pair.stdout.contains("Successfully paired"));
    assert_eq!(outcome.connect_target, "192.168.1.10:5555");
    let connect = outcome.connect.unwrap();
    assert!(connect.succeeded);
    assert_eq!(connect.stdout, "connected to 192.168.1.10:5555");

    let invocations = std::fs::read_to_string(&log).unwrap();
    assert_eq!(
        invocations.lines().collect::<Vec<_>>(),
        vec![
            "pair 192.168.1.10:37123 123456",
            "connect 192.168.1.10:5555",
        ]
    );
}

#[test]
fn test_bridge_refusal_is_reported_not_raised() {
    let dir = TempDir::new().unwrap();
    let bridge = write_script(
        dir.path(),
        "adb",
        r#"echo "error: no devices/emulators found" 1>&2; exit 1"#,
    );
    let session = Session::new(bridge, None, ProcessRunner::new());

    let result = session.connect("10.0.0.2:5555").unwrap();
    assert!(!result.succeeded);
    assert_eq!(result.exit_code, Some(1));
    assert_eq!(result.diagnostic(), "error: no devices/emulators found");
}

#[test]
fn test_run_command_reaches_the_bridge_as_one_argument() {
    let dir = TempDir::new().unwrap();
    let bridge = write_script(dir.path(), "adb", r#"echo "$#""#);
    let session = Session::new(bridge, None, ProcessRunner::new());

    let result = session.run_command("ls -la /sdcard").unwrap();
    // "shell" plus the whole command string, nothing split.
    assert_eq!(result.stdout, "2");
}

#[test]
fn test_install_checks_file_before_spawning() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let bridge = fake_bridge(dir.path(), &log, true);
    let session = Session::new(bridge, None, ProcessRunner::new());

    let missing = dir.path().join("missing.apk");
    let err = session.install(missing.to_str().unwrap()).unwrap_err();

    assert!(matches!(err, BridgeError::Validation(_)));
    assert!(!log.exists(), "nothing should have been spawned");
}

#[test]
fn test_mirror_requires_ready_device() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let bridge = fake_bridge(dir.path(), &log, false);
    let marker = dir.path().join("mirror-ran");
    let mirror = write_script(
        dir.path(),
        "scrcpy",
        &format!(r#"touch "{}""#, marker.display()),
    );
    let session = Session::new(bridge, Some(mirror), ProcessRunner::new());

    let outcome = session.mirror().unwrap();

    assert!(matches!(outcome, MirrorOutcome::NoDevice));
    assert!(!marker.exists(), "mirroring tool must not start");
}

#[test]
fn test_mirror_launches_tool_when_device_ready() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let bridge = fake_bridge(dir.path(), &log, true);
    let marker = dir.path().join("mirror-ran");
    let mirror = write_script(
        dir.path(),
        "scrcpy",
        &format!(r#"touch "{}""#, marker.display()),
    );
    let session = Session::new(bridge, Some(mirror), ProcessRunner::new());

    let outcome = session.mirror().unwrap();

    match outcome {
        MirrorOutcome::Finished(result) => assert!(result.succeeded),
        other => panic!("expected the mirroring tool to run, got {:?}", other),
    }
    assert!(marker.exists());
}

#[test]
fn test_mirror_without_tool_names_search_locations() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("invocations.log");
    let bridge = fake_bridge(dir.path(), &log, true);
    let session = Session::new(bridge, None, ProcessRunner::new());

    let err = session.mirror().unwrap_err();
    match err {
        BridgeError::ToolNotFound { tool, .. } => assert_eq!(tool, "scrcpy"),
        other => panic!("expected a missing-tool error, got {:?}", other),
    }
    assert!(!log.exists(), "no device check before the tool exists");
}
