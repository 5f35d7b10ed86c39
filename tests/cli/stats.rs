use crate::cli::support::{flightpath, write_flights};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_stats_human() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(
            "Number of airports: 5\nNumber of flights: 8\nTotal Miles for All Flights: 6456\n",
        );
}

#[test]
fn test_stats_json() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    let output = flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["airports"], 5);
    assert_eq!(json["flights"], 8);
    assert_eq!(json["total_miles"], 6456);
}

#[test]
fn test_stats_without_dataset() {
    let dir = tempdir().unwrap();

    flightpath(dir.path())
        .arg("stats")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no dataset given"));
}

#[test]
fn test_stats_missing_dataset() {
    let dir = tempdir().unwrap();

    flightpath(dir.path())
        .arg("--data")
        .arg(dir.path().join("invalid.pdf"))
        .arg("stats")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("dataset not found"));
}

#[test]
fn test_quiet_still_reports_errors() {
    let dir = tempdir().unwrap();

    flightpath(dir.path())
        .args(["--quiet", "stats"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no dataset given"));
}
