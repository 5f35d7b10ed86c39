use crate::cli::support::{flightpath, write_flights};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_help() {
    let dir = tempdir().unwrap();
    flightpath(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    flightpath(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "flightpath {}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("flightpath --help"));
}

#[test]
fn test_quiet_hides_banner() {
    let dir = tempdir().unwrap();
    flightpath(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let dir = tempdir().unwrap();
    flightpath(dir.path()).arg("fly").assert().code(2);
}

#[test]
fn test_unknown_subcommand_json_envelope() {
    let dir = tempdir().unwrap();
    let output = flightpath(dir.path())
        .args(["--format", "json", "fly"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_dataset_from_config_file() {
    let dir = tempdir().unwrap();
    write_flights(dir.path());
    std::fs::write(dir.path().join("config.toml"), "dataset = \"flights.dot\"\n").unwrap();

    flightpath(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of airports: 5"));
}

#[test]
fn test_explicit_config_with_bad_label() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "weight_label = \"a b\"\n").unwrap();

    flightpath(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid weight_label"));
}

#[test]
fn test_dataset_from_env() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .env("FLIGHTPATH_DATA", &path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of flights: 8"));
}
