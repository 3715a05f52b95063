//! Integration tests for split command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{formatter_cmd, write_timesheet, TIMESHEET_HEADER};

#[test]
fn test_split_overnight_shift() {
    let temp = TempDir::new().unwrap();
    let timesheet = write_timesheet(
        temp.path(),
        "week.csv",
        &["1001,01/15/2024,11:20 PM,01/16/2024,12:50 AM,1.5"],
    );

    formatter_cmd()
        .arg("split")
        .arg(&timesheet)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 shifts (1 read)"));

    let written = fs::read_to_string(temp.path().join("week_separated.csv")).unwrap();
    assert_eq!(
        written,
        format!(
            "{}\n\
             1001,01/15/2024,11:20 PM,01/15/2024,11:59 PM,0.67\n\
             1001,01/16/2024,12:00 AM,01/16/2024,12:50 AM,0.83\n",
            TIMESHEET_HEADER
        )
    );
}

#[test]
fn test_split_keeps_day_shifts() {
    let temp = TempDir::new().unwrap();
    let timesheet = write_timesheet(
        temp.path(),
        "week.csv",
        &[
            "1001,01/15/2024,09:00 AM,01/15/2024,05:00 PM,8",
            "1002,01/15/2024,10:00 PM,01/16/2024,02:00 AM,4",
            "1003,01/16/2024,09:00 AM,01/16/2024,01:30 PM,4.5",
        ],
    );
    let output = temp.path().join("split.csv");

    formatter_cmd()
        .arg("split")
        .arg(&timesheet)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "1001,01/15/2024,09:00 AM,01/15/2024,05:00 PM,8.0");
    assert_eq!(lines[2], "1002,01/15/2024,10:00 PM,01/15/2024,11:59 PM,2.0");
    assert_eq!(lines[3], "1002,01/16/2024,12:00 AM,01/16/2024,02:00 AM,2.0");
    assert_eq!(lines[4], "1003,01/16/2024,09:00 AM,01/16/2024,01:30 PM,4.5");
}

#[test]
fn test_split_missing_timesheet_argument() {
    formatter_cmd().arg("split").assert().failure();
}
