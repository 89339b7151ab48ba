#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpc() -> Command {
    cargo_bin_cmd!("rpetcare")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpetcare.sqlite", name));
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

/// Initialize a fresh test database
pub fn init_db(db_path: &str) {
    rpc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and schedule a small dataset useful for many tests:
/// - a daily feeding starting 2025-03-01 (14 instances)
/// - a one-off vet visit on 2025-03-05
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rpc()
        .args([
            "--db",
            db_path,
            "add",
            "Breakfast",
            "--date",
            "2025-03-01",
            "--time",
            "07:30",
            "--category",
            "feeding",
            "--recur",
            "1d",
        ])
        .assert()
        .success();

    rpc()
        .args([
            "--db",
            db_path,
            "add",
            "Vaccination",
            "--date",
            "2025-03-05",
            "--time",
            "10:00",
            "--category",
            "vet",
            "--priority",
            "high",
        ])
        .assert()
        .success();
}

/// Count rows in the tasks table directly through the library.
pub fn count_tasks(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM tasks", [], |r| r.get(0))
        .expect("count tasks")
}
