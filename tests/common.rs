#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("weekledger")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weekledger.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and record a typical Monday and Tuesday
pub fn init_store_with_data(store_path: &str) {
    wl().args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--store",
        store_path,
        "set",
        "mon",
        "--in",
        "09:00",
        "--out",
        "18:00",
        "--lunch",
    ])
    .assert()
    .success();

    wl().args([
        "--store",
        store_path,
        "set",
        "tue",
        "--in",
        "09:30",
        "--out",
        "19:00",
        "--lunch",
        "--dinner",
    ])
    .assert()
    .success();
}
