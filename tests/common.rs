#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tw() -> Command {
    cargo_bin_cmd!("trapwatch")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trapwatch.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    tw().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tw().args(["--db", db_path, "add", "Kitchen", "3", "--date", "2025-06-01"])
        .assert()
        .success();

    tw().args(["--db", db_path, "add", "Garage", "5", "--date", "2025-06-02"])
        .assert()
        .success();
}
