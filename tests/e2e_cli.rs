//! E2E: add -> search -> disable -> enable -> remove -> export, through the binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn hostman(hosts: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("hostman").unwrap();
    cmd.env("HOSTMAN_HOSTS_FILE", hosts);
    cmd
}

#[test]
fn e2e_happy_path() {
    let (_dir, path) = common::hosts_fixture("");

    hostman(&path)
        .args(["-add", "1.1.1.1@a.test"])
        .assert()
        .success()
        .stdout("1.1.1.1\ta.test\n");
    hostman(&path)
        .args(["-add", "2.2.2.2@b.test,www.b.test"])
        .assert()
        .success();
    assert_eq!(
        common::read(&path),
        "1.1.1.1\ta.test\n2.2.2.2\tb.test www.b.test\n"
    );

    hostman(&path)
        .args(["-search", "b.test"])
        .assert()
        .success()
        .stdout("2.2.2.2\tb.test www.b.test\n");

    hostman(&path)
        .args(["-search", "a.test", "-disable"])
        .assert()
        .success();
    assert_eq!(
        common::read(&path),
        "#1.1.1.1\ta.test\n2.2.2.2\tb.test www.b.test\n"
    );

    hostman(&path)
        .args(["-search", "a.test", "-enable"])
        .assert()
        .success();
    assert_eq!(
        common::read(&path),
        "1.1.1.1\ta.test\n2.2.2.2\tb.test www.b.test\n"
    );

    hostman(&path)
        .args(["-search", "b.test", "-remove"])
        .assert()
        .success()
        .stdout("2.2.2.2\tb.test www.b.test\n");
    assert_eq!(common::read(&path), "1.1.1.1\ta.test\n");

    hostman(&path)
        .arg("-export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"domain\": \"a.test\""));
}

#[test]
fn config_flag_overrides_env_default() {
    let (_dir, path) = common::hosts_fixture("9.9.9.9\tnine.test\n");
    Command::cargo_bin("hostman")
        .unwrap()
        .env("HOSTMAN_HOSTS_FILE", "/nonexistent/hosts")
        .args(["-config"])
        .arg(&path)
        .args(["-search", "nine"])
        .assert()
        .success()
        .stdout("9.9.9.9\tnine.test\n");
}

#[test]
fn duplicate_add_exits_1_and_keeps_file() {
    let (_dir, path) = common::hosts_fixture("1.1.1.1\ta.test\n");
    hostman(&path)
        .args(["-add", "1.1.1.1@a.test"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already"));
    assert_eq!(common::read(&path), "1.1.1.1\ta.test\n");
}

#[test]
fn bad_format_exits_1() {
    let (_dir, path) = common::hosts_fixture("");
    hostman(&path)
        .args(["--add", "example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid host entry format"));
}

#[test]
fn missing_hosts_file_exits_1() {
    let dir = common::temp_dir();
    hostman(&dir.path().join("nope"))
        .arg("-export")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
    assert!(!dir.path().join("nope").exists());
}

#[test]
fn search_value_may_start_with_hyphen() {
    let (_dir, path) = common::hosts_fixture("1.1.1.1\ta-export.test\n2.2.2.2\tb.test\n");
    hostman(&path)
        .args(["-search", "-export"])
        .assert()
        .success()
        .stdout("1.1.1.1\ta-export.test\n");
    assert_eq!(
        common::read(&path),
        "1.1.1.1\ta-export.test\n2.2.2.2\tb.test\n"
    );
}

#[test]
fn bool_flags_with_explicit_values() {
    let (_dir, path) = common::hosts_fixture("1.1.1.1\ta.test\n2.2.2.2\tb.test\n");
    hostman(&path)
        .args(["-search", "a.test", "-remove=false", "-disable=true"])
        .assert()
        .success()
        .stdout("1.1.1.1\ta.test\n");
    assert_eq!(common::read(&path), "#1.1.1.1\ta.test\n2.2.2.2\tb.test\n");

    hostman(&path).arg("-export=false").assert().code(2);
}

#[test]
fn errors_name_the_hosts_file() {
    let dir = common::temp_dir();
    let missing = dir.path().join("nope");
    hostman(&missing)
        .arg("-export")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "hosts file {}",
            missing.display()
        )));
}
