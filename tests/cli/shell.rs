use crate::cli::support::{flightpath, write_flights};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_shell_with_preset_dataset() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());

    flightpath(dir.path())
        .arg("--data")
        .arg(&path)
        .arg("shell")
        .write_stdin("1\n2\nAUS\nLGA\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Flight Router app."))
        .stdout(predicate::str::contains("Number of airports: 5"))
        .stdout(predicate::str::contains("Total number of miles from start is: 1517"))
        .stdout(predicate::str::ends_with("Exiting app.\n"));
}

#[test]
fn test_shell_prompts_for_file() {
    let dir = tempdir().unwrap();
    let path = write_flights(dir.path());
    let input = format!("nowhere.dot\n{}\n5\n3\n", path.display());

    flightpath(dir.path())
        .arg("shell")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Please enter a valid file."))
        .stdout(predicate::str::contains(
            "Error: Invalid command. Please enter 1, 2, or 3.",
        ));
}

#[test]
fn test_shell_end_of_input() {
    let dir = tempdir().unwrap();

    flightpath(dir.path())
        .arg("shell")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Exiting app.\n"));
}
