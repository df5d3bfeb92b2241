use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[editor]
strip_trailing_whitespace = false

[logging]
level = "warn"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsection"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mdsection doctor"))
        .stdout(predicate::str::contains("editor.strip_trailing_whitespace: false"))
        .stdout(predicate::str::contains("logging.level: warn"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("mdsection").join("config.toml");
    write_file(&cfg_path, "version = 1\n[logging]\nlevel = \"error\"\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsection"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   mdsection doctor"))
        .stdout(predicate::str::contains("logging.level: error"));
}

#[test]
fn doctor_falls_back_to_defaults_without_config() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsection"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // empty dir → no config
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("(not found, using defaults)"))
        .stdout(predicate::str::contains("editor.strip_trailing_whitespace: true"))
        .stdout(predicate::str::contains("logging.file: (none)"));
}
