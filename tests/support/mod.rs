//! Helpers shared by integration tests.

#![allow(dead_code)]

use std::io::Write;

use oddsboard::domain::Fixture;
use tempfile::NamedTempFile;

/// Write fixtures to a temporary snapshot file in the provider's schema.
pub fn write_snapshot(fixtures: &[Fixture]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("oddsboard-snapshot-")
        .suffix(".json")
        .tempfile()
        .expect("create snapshot file");
    serde_json::to_writer(&mut file, fixtures).expect("write snapshot");
    file.flush().expect("flush snapshot");
    file
}

/// Write a temporary TOML config file.
pub fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("oddsboard-config-")
        .suffix(".toml")
        .tempfile()
        .expect("create config file");
    file.write_all(contents.as_bytes()).expect("write config");
    file.flush().expect("flush config");
    file
}
