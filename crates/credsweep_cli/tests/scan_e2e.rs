//! End-to-end tests for the `credsweep scan` command.

#![expect(clippy::expect_used, reason = "tests use expect for clearer failure messages")]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn credsweep() -> Command {
    Command::new(env!("CARGO_BIN_EXE_credsweep"))
}

#[test]
fn exit_zero_when_tree_is_clean() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("clean.rs"), "fn main() {}\n").expect("write");

    credsweep()
        .args(["scan", "."])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn exit_one_when_leak_found() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("db.js"), "const password = \"hunter2XY\";\n").expect("write");

    credsweep()
        .args(["scan", "."])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("high"));
}

#[test]
fn known_default_credential_is_reported_as_critical() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("test.js"), "const testPwd = \"admin@123\";\n").expect("write");

    credsweep()
        .args(["scan", "."])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("critical"))
        .stdout(predicate::str::contains("admin@123"));
}

#[test]
fn failed_scan_prints_remediation_guidance() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("db.js"), "password = \"hunter2XY\"\n").expect("write");

    credsweep()
        .args(["scan", "."])
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Remediation"))
        .stdout(predicate::str::contains("secret manager"));
}

#[test]
fn exit_zero_flag_overrides_findings() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("db.js"), "password = \"hunter2XY\"\n").expect("write");

    credsweep()
        .args(["scan", ".", "--exit-zero"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn exit_two_when_root_cannot_be_listed() {
    credsweep()
        .args(["scan", "/nonexistent/path/that/does/not/exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("directory"));
}

#[test]
fn suppressed_lines_do_not_fail_the_scan() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("settings.js"),
        concat!(
            "const password = process.env.SECRET;\n",
            "password: \"\"\n",
            "legacy = \"admin@123\" // ROTATE_ME\n",
            "passwordField.setText(\"••••••••\");\n",
        ),
    )
    .expect("write");

    credsweep().args(["scan", "."]).current_dir(dir.path()).assert().success();
}

#[test]
fn node_modules_is_pruned_by_default() {
    let dir = TempDir::new().expect("tempdir");
    let deps = dir.path().join("node_modules").join("lib");
    fs::create_dir_all(&deps).expect("mkdir");
    fs::write(deps.join("x.js"), "password = \"hunter2XY\"\n").expect("write");

    credsweep().args(["scan", "."]).current_dir(dir.path()).assert().success();
}

#[test]
fn exclude_dir_flag_prunes_additional_directories() {
    let dir = TempDir::new().expect("tempdir");
    let generated = dir.path().join("generated");
    fs::create_dir(&generated).expect("mkdir");
    fs::write(generated.join("seed.py"), "password = 'hunter2XY'\n").expect("write");

    credsweep().args(["scan", "."]).current_dir(dir.path()).assert().code(1);

    credsweep()
        .args(["scan", ".", "--exclude-dir", "generated"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn exclude_file_flag_skips_named_files() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("fixtures.sql"), "-- password = 'hunter2XY'\n").expect("write");

    credsweep()
        .args(["scan", ".", "--exclude-file", "fixtures.sql"])
        .current_dir(dir.path())
        .assert()
        .success();
}

#[test]
fn config_file_exclusions_are_honoured() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(".credsweep.toml"),
        "excluded_dir_names = [\"secrets\"]\n",
    )
    .expect("write");

    let secrets = dir.path().join("secrets");
    fs::create_dir(&secrets).expect("mkdir");
    fs::write(secrets.join("api.env"), "password = \"hunter2XY\"\n").expect("write");

    credsweep().args(["scan", "."]).current_dir(dir.path()).assert().success();
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = TempDir::new().expect("tempdir");

    credsweep()
        .args(["scan", ".", "--config", "missing.toml"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn malformed_config_is_fatal() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(".credsweep.toml"), "excluded_dir_names = 7\n").expect("write");

    credsweep().args(["scan", "."]).current_dir(dir.path()).assert().code(2);
}

#[test]
fn json_output_reports_findings_and_verdict() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("db.js"), "const password = \"hunter2XY\";\n").expect("write");

    let output = credsweep()
        .args(["scan", ".", "--format", "json", "--exit-zero"])
        .current_dir(dir.path())
        .output()
        .expect("run");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");

    assert_eq!(json["passed"], serde_json::json!(false));
    let findings = json["findings"].as_array().expect("findings array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["severity"], "high");
    assert_eq!(findings[0]["line"], 1);
    assert_eq!(findings[0]["matched_text"], "password = \"hunter2XY\"");
}

#[test]
fn json_output_for_clean_tree_passes() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("main.rs"), "fn main() {}\n").expect("write");

    let output = credsweep()
        .args(["scan", ".", "--format", "json"])
        .current_dir(dir.path())
        .output()
        .expect("run");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");

    assert_eq!(json["passed"], serde_json::json!(true));
    assert!(json["findings"].as_array().expect("findings array").is_empty());
}

#[test]
fn output_flag_writes_report_to_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("db.js"), "password = \"hunter2XY\"\n").expect("write");

    credsweep()
        .args(["scan", ".", "--output", "report.txt"])
        .current_dir(dir.path())
        .assert()
        .code(1);

    let report = fs::read_to_string(dir.path().join("report.txt")).expect("report written");
    assert!(report.contains("FAILED"));
    assert!(report.contains("db.js:1"));
}

#[test]
fn findings_are_grouped_most_severe_first() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("mixed.py"),
        "password = 'hunter2XY'\npin = 'admin@123'\n",
    )
    .expect("write");

    let output = credsweep()
        .args(["scan", ".", "--exit-zero"])
        .current_dir(dir.path())
        .output()
        .expect("run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let critical_pos = stdout.find("critical").expect("critical section");
    let high_pos = stdout.find("high").expect("high section");
    assert!(critical_pos < high_pos, "critical group should precede high group");
}

#[test]
fn skipped_unreadable_file_warns_but_scan_completes() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("blob.bin"), [0xffu8, 0x00, 0x80]).expect("write");
    fs::write(dir.path().join("ok.rs"), "fn main() {}\n").expect("write");

    credsweep()
        .args(["scan", "."])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));
}
