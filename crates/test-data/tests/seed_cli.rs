//! CLI-level tests for the seed binary.
//!
//! These spawn the compiled binary and assert on its exit status and console
//! output. They target the failure path, so no database is needed.

use std::process::Command;

#[test]
fn test_connection_failure_exits_nonzero() {
    // Port 9 (discard) refuses connections on any sane host
    let output = Command::new(env!("CARGO_BIN_EXE_seed"))
        .args(["--host", "127.0.0.1", "--port", "9"])
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to run seed binary");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Error:"),
        "Expected an error line, got: {stdout}"
    );
}
