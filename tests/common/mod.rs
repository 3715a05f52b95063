#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub const TIMESHEET_HEADER: &str =
    "Employee Id,Clock-In Date,Clock-In Time,Clock-Out Date,Clock-Out Time,Hours Worked";
pub const ROSTER_HEADER: &str = "Employee ID,State Number,Job Code,Pay Code";
pub const REPORT_HEADER: &str = "Employee ID,State Number,Job Code,Pay Code,Date,Hours Logged";

pub fn formatter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("timesheet-formatter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a timesheet with the standard header followed by `rows`
pub fn write_timesheet(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    write_csv(dir, name, TIMESHEET_HEADER, rows)
}

/// Write a roster with the standard header followed by `rows`
pub fn write_roster(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    write_csv(dir, name, ROSTER_HEADER, rows)
}

fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut content = format!("{}\n", header);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}
