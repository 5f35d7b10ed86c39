use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

pub const FLIGHTS: &str = r#"graph flights {
    "AUS" [label="Austin"];
    "BNA" [label="Nashville"];
    "LGA" [label="New York"];
    "SMF" [label="Sacramento"];
    "AUS" -- "BNA" [miles=753];
    "BNA" -- "LGA" [miles=764];
    "AUS" -- "ORD" [miles=978];
    "ORD" -- "LGA" [miles=733];
}
"#;

/// Get a Command for flightpath, isolated from the user's config and env
pub fn flightpath(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("flightpath");
    cmd.env("FLIGHTPATH_CONFIG_DIR", config_dir)
        .env_remove("FLIGHTPATH_DATA")
        .env_remove("FLIGHTPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write the sample dataset into `dir`
pub fn write_flights(dir: &Path) -> PathBuf {
    let path = dir.join("flights.dot");
    std::fs::write(&path, FLIGHTS).unwrap();
    path
}
