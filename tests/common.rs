#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slog() -> Command {
    cargo_bin_cmd!("stormlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stormlog.sqlite", name));
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

/// Initialize the DB schema via the CLI
pub fn init_db(db_path: &str) {
    slog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and pin a small set of places useful for many tests
pub fn init_db_with_visits(db_path: &str) {
    init_db(db_path);

    for city in ["Manila", "Manila", "Manila", "Cebu"] {
        slog()
            .args(["--db", db_path, "--test", "pin", city])
            .assert()
            .success();
    }
}

/// Open a session so that emergency reports are accepted
pub fn login(db_path: &str, user: &str) {
    slog()
        .args(["--db", db_path, "--test", "login", user])
        .assert()
        .success();
}
