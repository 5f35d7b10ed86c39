use crate::cli::support::{flightpath, write_flights};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_route_human() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["route", "AUS", "LGA"])
        .assert()
        .success()
        .stdout(
            "Shortest route from AUS to LGA:\n\
             From AUS to BNA: 753 miles\n\
             From BNA to LGA: 764 miles\n\
             Total number of miles from start is: 1517\n",
        );
}

#[test]
fn test_route_reverse_direction() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["route", "LGA", "AUS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("From LGA to BNA: 764 miles"))
        .stdout(predicate::str::contains("Total number of miles from start is: 1517"));
}

#[test]
fn test_route_json() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    let output = flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["--format", "json", "route", "ORD", "BNA"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["route"], serde_json::json!(["ORD", "LGA", "BNA"]));
    assert_eq!(json["miles"], serde_json::json!([733, 764]));
    assert_eq!(json["total_miles"], 1497);
}

#[test]
fn test_route_same_airport() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["route", "BNA", "BNA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total number of miles from start is: 0"));
}

#[test]
fn test_route_unknown_airport() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["route", "AUS", "XYZ"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: \"XYZ\""));
}

#[test]
fn test_route_unreachable() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["route", "SMF", "AUS"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no path from \"SMF\" to \"AUS\""));
}

#[test]
fn test_route_error_json_envelope() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    let output = flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .args(["--format", "json", "route", "AUS", "SMF"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "path_not_found");
}

#[test]
fn test_route_missing_argument() {
    let dir = tempdir().unwrap();

    flightpath(dir.path())
        .args(["route", "AUS"])
        .assert()
        .code(2);
}
