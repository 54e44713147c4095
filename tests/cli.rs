use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn docli(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docli").unwrap();
    cmd.env("DOCLI_CONFIG_DIR", config_dir)
        .env_remove("DOCLI_TOKEN")
        .env_remove("DOCLI_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn token_is_stored_in_config_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    docli(temp_dir.path())
        .args(["token", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token supplied!"))
        .stdout(predicate::str::contains("DOCLI_TOKEN").not());

    let stored = std::fs::read_to_string(temp_dir.path().join("config.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(config["token"], "abc123");
}

#[test]
fn token_warns_when_env_token_is_set() {
    let temp_dir = tempfile::tempdir().unwrap();

    docli(temp_dir.path())
        .env("DOCLI_TOKEN", "from-env")
        .args(["auth", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCLI_TOKEN"));
}

#[test]
fn token_message_in_json_mode() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = docli(temp_dir.path())
        .args(["token", "abc123", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["message"], "Token supplied!");
}

#[test]
fn commands_fail_without_token() {
    let temp_dir = tempfile::tempdir().unwrap();

    docli(temp_dir.path())
        .arg("account")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn delete_against_unreachable_api_prints_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    docli(temp_dir.path())
        .env("DOCLI_TOKEN", "x")
        .env("DOCLI_API_URL", "http://127.0.0.1:9")
        .args(["droplets", "delete", "42"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_positional_is_a_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    docli(temp_dir.path())
        .args(["droplets", "get"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_tag_action_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    docli(temp_dir.path())
        .args(["droplets", "action-by-tag", "web", "--action", "explode"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn volume_answers_are_read_from_piped_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();

    docli(temp_dir.path())
        .env("DOCLI_TOKEN", "x")
        .env("DOCLI_API_URL", "http://127.0.0.1:9")
        .args(["volumes", "add"])
        .write_stdin("data\n10\n\nnyc1\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Volume name:"))
        .stderr(predicate::str::contains("HTTP error"))
        .stderr(predicate::str::contains("required").not());
}
