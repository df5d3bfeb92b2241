use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const DOC: &str = "# Title\n\n## Contributors\n\nAlice\n\n### Bots\n\nci\n\n## License\n";

fn mdsection(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdsection"));
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn find_prints_one_based_range() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("README.md");
    fs::write(&doc, DOC).unwrap();

    mdsection(tmp.path())
        .arg("find")
        .arg(&doc)
        .args(["--section", "Contributors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   mdsection find"))
        .stdout(predicate::str::contains("start:   3"))
        .stdout(predicate::str::contains("end:     10"))
        .stdout(predicate::str::contains("nested:  Bots"));
}

#[test]
fn find_with_wrong_level_lists_available_sections() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("README.md");
    fs::write(&doc, DOC).unwrap();

    mdsection(tmp.path())
        .arg("find")
        .arg(&doc)
        .args(["--section", "Contributors", "--level", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Section not found: 'Contributors'"))
        .stderr(predicate::str::contains("  - Contributors (level 2)"))
        .stderr(predicate::str::contains("  - Bots (level 3)"));
}

#[test]
fn find_rejects_level_zero() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("README.md");
    fs::write(&doc, DOC).unwrap();

    mdsection(tmp.path())
        .arg("find")
        .arg(&doc)
        .args(["--section", "Contributors", "--level", "0"])
        .assert()
        .code(2);
}

#[test]
fn find_on_missing_file_fails() {
    let tmp = tempdir().unwrap();

    mdsection(tmp.path())
        .arg("find")
        .arg(tmp.path().join("nope.md"))
        .args(["--section", "Anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAIL mdsection find"))
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn headings_json_lists_all_headings() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("README.md");
    fs::write(&doc, DOC).unwrap();

    let assert = mdsection(tmp.path()).arg("headings").arg(&doc).arg("--json").assert().success();

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.len(), 4);
    assert_eq!(parsed[2]["title"], "Bots");
    assert_eq!(parsed[2]["level"], 3);
    assert_eq!(parsed[2]["line"], 7);
}

#[test]
fn headings_quiet_indents_by_level() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("README.md");
    fs::write(&doc, DOC).unwrap();

    mdsection(tmp.path())
        .arg("headings")
        .arg(&doc)
        .arg("--quiet")
        .assert()
        .success()
        .stdout("Title\n  Contributors\n    Bots\n  License\n");
}

#[test]
fn headings_table_has_footer() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("README.md");
    fs::write(&doc, DOC).unwrap();

    mdsection(tmp.path())
        .arg("headings")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contributors"))
        .stdout(predicate::str::contains("-- 4 headings --"));
}
