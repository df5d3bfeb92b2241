use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_when_explicit_config_missing() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsection"));
    cmd.arg("--config").arg(&missing).arg("doctor");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("FAIL mdsection doctor"))
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn doctor_fails_on_bad_version() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(&cfg, "version = 3\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsection"));
    cmd.arg("--config").arg(&cfg).arg("doctor");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("FAIL mdsection doctor"))
        .stderr(predicate::str::contains("version 3 is unsupported"));
}
