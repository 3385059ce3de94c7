//! CLI Interface E2E Tests
//!
//! These tests run the lexat binary against the files in
//! `tests/fixtures`, from an empty working directory so no stray
//! `lexat.toml` is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A lexat command isolated from the user's configuration.
fn lexat(work_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lexat"));
    cmd.current_dir(work_dir.path())
        .env("HOME", work_dir.path())
        .env("XDG_CONFIG_HOME", work_dir.path())
        .env_remove("LEXAT_CONFIG")
        .env_remove("LEXAT_VERBOSE")
        .env("LEXAT_NO_COLOR", "true");
    cmd
}

#[test]
fn test_cli_help() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("dump")));
}

#[test]
fn test_cli_version() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lexat"));
}

#[test]
fn test_dump_valid_file() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir)
        .arg("dump")
        .arg(fixtures_dir().join("valid.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "2:1 identifier \"width\"\n2:7 equal_sign '='\n2:9 int 1280\n",
        ))
        .stdout(predicate::str::contains("3:9 string \"Main window\""))
        .stdout(predicate::str::contains("4:9 float 1.25"))
        .stdout(predicate::str::contains("5:10 int 16"))
        .stdout(predicate::str::contains("comment").not());
}

#[test]
fn test_dump_with_config_symbols() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir)
        .arg("--config")
        .arg(fixtures_dir().join("lexat.toml"))
        .arg("dump")
        .arg(fixtures_dir().join("valid.cfg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2:1 symbol width (1)"));
}

#[test]
fn test_dump_json() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    let output = lexat(&work_dir)
        .arg("dump")
        .arg("--json")
        .arg(fixtures_dir().join("broken.cfg"))
        .output()
        .expect("Failed to run lexat");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("dump --json should print JSON");
    assert_eq!(value[0]["errors"], 2);
    assert_eq!(value[0]["tokens"][5]["kind"], "error");
    assert_eq!(value[0]["tokens"][5]["value"], "digit out of radix");
}

#[test]
fn test_dump_stdin() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir)
        .args(["dump", "-"])
        .write_stdin("a, b")
        .assert()
        .success()
        .stdout("1:1 identifier \"a\"\n1:2 comma ','\n1:4 identifier \"b\"\n");
}

#[test]
fn test_dump_missing_file() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir)
        .args(["dump", "missing.cfg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read missing.cfg"));
}

#[test]
fn test_check_valid_file() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir)
        .arg("check")
        .arg(fixtures_dir().join("valid.cfg"))
        .assert()
        .success()
        .stderr(predicate::str::contains("error").not());
}

#[test]
fn test_check_broken_file() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::copy(fixtures_dir().join("broken.cfg"), work_dir.path().join("broken.cfg"))
        .expect("Failed to copy fixture");

    lexat(&work_dir)
        .args(["check", "broken.cfg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "broken.cfg:2:9: error[E1006]: digit out of radix",
        ))
        .stderr(predicate::str::contains("depth = 089"))
        .stderr(predicate::str::contains(
            "broken.cfg:3:8: error[E1003]: unterminated string constant",
        ))
        .stderr(predicate::str::contains("2 lexical error(s) in 1 file(s)"));
}

#[test]
fn test_check_reads_local_config() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(work_dir.path().join("lexat.toml"), "[scanner]\nscan_octal = false\n")
        .expect("Failed to write config");
    std::fs::write(work_dir.path().join("in.cfg"), "x = 089\n").expect("Failed to write input");

    lexat(&work_dir).args(["check", "in.cfg"]).assert().success();
}

#[test]
fn test_bad_config_is_reported() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(work_dir.path().join("lexat.toml"), "[scanner]\nno_such_option = 1\n")
        .expect("Failed to write config");

    lexat(&work_dir)
        .args(["dump", "-"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_init_writes_loadable_config() {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    lexat(&work_dir).arg("init").assert().success();

    let written = work_dir.path().join("lexat.toml");
    assert!(written.exists(), "init should write lexat.toml");

    lexat(&work_dir).arg("init").assert().failure().stderr(
        predicate::str::contains("Refusing to overwrite existing file"),
    );
    lexat(&work_dir).args(["init", "--force"]).assert().success();

    lexat(&work_dir)
        .args(["dump", "-"])
        .write_stdin("ok")
        .assert()
        .success()
        .stdout("1:1 identifier \"ok\"\n");
}
