//! Runs the `scribe` binary on a scripted console session.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

/// Runs scribe with stdin fed from `script`. Returns (exit code, stdout, stderr).
fn run_scribe(dir: &Path, args: &[&str], script: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scribe"))
        .arg("--config")
        .arg(dir.join("absent.toml"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start scribe");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    let output = child.wait_with_output().expect("Failed to wait for scribe");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_text_only_session() {
    let dir = tempdir().unwrap();
    let script = "!q -a Ann 2022 \"so it goes\"\n!q -y\n!q ann\n";

    let (code, stdout, stderr) = run_scribe(
        dir.path(),
        &["--no-cards", "--quotebook", "book.json", "--sender", "tester"],
        script,
    );

    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("[tester] Inscribed into the quotebook"));
    assert!(stdout.contains("[tester] \"so it goes\" - Ann, 2022"));
    assert!(dir.path().join("book.json").exists());
}

#[test]
fn test_import_legacy() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("old.txt"),
        "\"to be or not\" - Will 1600\n\"so it goes\" - Kurt 1969\n",
    )
    .unwrap();

    let (code, _, stderr) = run_scribe(
        dir.path(),
        &["--quotebook", "book.json", "--import-legacy", "old.txt"],
        "",
    );

    assert_eq!(code, 0, "stderr: {stderr}");
    let stored = std::fs::read_to_string(dir.path().join("book.json")).unwrap();
    assert!(stored.contains("\"author\": \"Kurt\""));
}

#[test]
fn test_bad_config_exits_with_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "trigger = [").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_scribe"))
        .arg("--config")
        .arg(&config)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run scribe");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration Error"));
}
