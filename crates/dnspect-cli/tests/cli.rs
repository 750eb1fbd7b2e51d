//! Binary-level checks for the dnspect CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_main_flags() {
    Command::cargo_bin("dnspect")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--api"))
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--rps"))
        .stdout(predicate::str::contains("--retry"));
}

#[test]
fn missing_domain_list_is_fatal() {
    Command::cargo_bin("dnspect")
        .unwrap()
        .args(["-f", "definitely-missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("domain list"));
}

#[test]
fn malformed_domain_list_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sites.yaml");
    std::fs::write(&path, "domains: {broken\n").unwrap();

    Command::cargo_bin("dnspect")
        .unwrap()
        .args(["-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}
