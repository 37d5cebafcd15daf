//! End-to-end tests for the `pystrip` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn pystrip() -> Command {
    Command::cargo_bin("pystrip").unwrap()
}

#[test]
fn strip_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.py");
    fs::write(&input, "\"\"\"App.\"\"\"\n\n# setup\nVERSION = '2'\n\nmain()\n").unwrap();

    pystrip()
        .args(["strip-comments", "--remove-newlines"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let out = fs::read_to_string(dir.path().join("app_stripped.py")).unwrap();
    assert_eq!(out, "VERSION = ''\nmain()");
}

#[test]
fn verbose_directory_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("pkg");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("ok.py"), "'doc'\nrun()\n").unwrap();
    fs::write(root.join("sub/broken.py"), "def f(:\n").unwrap();
    fs::write(root.join("blank.py"), "\n").unwrap();

    pystrip()
        .args(["strip-comments", "--verbose"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped writing empty or ignored file:"))
        .stdout(predicate::str::contains(
            "has been processed by the \"comment stripper\" successfully!",
        ))
        .stderr(predicate::str::contains("Error processing"))
        .stderr(predicate::str::contains("broken.py"));

    let out = dir.path().join("pkg_stripped");
    assert_eq!(fs::read_to_string(out.join("ok.py")).unwrap(), "\nrun()");
    assert!(out.join("sub").is_dir());
    assert!(!out.join("sub/broken.py").exists());
}

#[test]
fn quiet_directory_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("pkg");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("broken.py"), "x = = 1\n").unwrap();

    pystrip()
        .arg("strip-comments")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn single_file_failure_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.py");
    fs::write(&input, "class :\n").unwrap();

    pystrip()
        .arg("strip-comments")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to process"));
    assert!(!dir.path().join("bad_stripped.py").exists());
}

#[test]
fn missing_path_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    pystrip()
        .arg("strip-comments")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn json_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("m.py");
    fs::write(&input, "X = 1\n").unwrap();

    pystrip()
        .args(["strip-comments", "--json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"file\""))
        .stdout(predicate::str::contains("\"written\": 1"));
}

#[test]
fn preview_prints_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("p.py");
    fs::write(&input, "def f():\n    'doc'\n").unwrap();

    pystrip()
        .arg("preview")
        .arg(&input)
        .assert()
        .success()
        .stdout("def f():\n    pass\n");
    assert!(!dir.path().join("p_stripped.py").exists());
}

#[test]
fn check_reports_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.py");
    let bad = dir.path().join("bad.py");
    fs::write(&good, "x = 1\n").unwrap();
    fs::write(&bad, "x = (\n").unwrap();

    pystrip()
        .arg("check")
        .arg(&good)
        .assert()
        .success()
        .stderr(predicate::str::contains("OK:"));
    pystrip()
        .arg("check")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid Python"));
}
