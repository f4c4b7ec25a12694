#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a throwaway directory so no
/// user configuration leaks in.
pub fn rti() -> Command {
    let home = env::temp_dir().join("inspectlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("inspectlog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_inspectlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty output directory inside the temp dir
pub fn temp_out_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("{}_inspectlog_out", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).ok();
    dir
}

pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run `args` against `db_path` and return the id from the "(id ...)" message.
pub fn add_and_get_id(db_path: &str, args: &[&str]) -> String {
    let out = rti()
        .args(["--db", db_path])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    let start = text.find("(id ").expect("id in output") + 4;
    let end = start + text[start..].find(')').expect("closing paren");
    text[start..end].to_string()
}
