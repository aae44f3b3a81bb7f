//! CLI-level tests for the error paths that never touch platform tools.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_input_reports_usage_and_exits_2() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("iconset")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            "no icon.png or icon.svg found, and no input file specified",
        ))
        .stdout(predicate::str::contains("Usage: iconset [INPUT] [OUTPUT]"));

    // Nothing was created before the failure.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unsupported_format_reports_usage_and_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.gif"), b"GIF89a").unwrap();

    Command::cargo_bin("iconset")
        .unwrap()
        .arg("logo.gif")
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unsupported file format"))
        .stdout(predicate::str::contains("Usage: iconset [INPUT] [OUTPUT]"));

    // The iconset directory is created before format validation.
    let iconset_dir = dir.path().join("Miso.iconset");
    assert!(iconset_dir.is_dir());
    assert_eq!(std::fs::read_dir(&iconset_dir).unwrap().count(), 0);
}

#[test]
fn quiet_still_reports_errors_on_stderr() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("iconset")
        .unwrap()
        .arg("--quiet")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no icon.png or icon.svg"));
}
