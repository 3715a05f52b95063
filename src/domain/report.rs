//! Report output: daily totals joined with roster metadata

use super::aggregator::DayTotals;
use super::clock::{format_date, format_hours};
use super::records::{Roster, Shift};
use crate::error::Result;
use chrono::NaiveDate;
use std::io::Write;
use tracing::debug;

/// Header row of the hours report
pub const REPORT_HEADER: [&str; 6] = [
    "Employee ID",
    "State Number",
    "Job Code",
    "Pay Code",
    "Date",
    "Hours Logged",
];

/// One output line: an employee's hours on one date
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub employee_id: String,
    pub state_number: String,
    pub job_code: String,
    pub pay_code: String,
    pub date: NaiveDate,
    /// Unrounded total; rounding happens when the row is rendered
    pub hours: f64,
}

impl ReportRow {
    pub fn to_record(&self) -> [String; 6] {
        [
            self.employee_id.clone(),
            self.state_number.clone(),
            self.job_code.clone(),
            self.pay_code.clone(),
            format_date(self.date),
            format_hours(self.hours),
        ]
    }
}

/// Joined report rows plus the employees that could not be joined
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    /// Employees with logged hours but no roster entry, in timesheet order
    pub unmatched: Vec<String>,
}

/// Join day totals with the roster.
///
/// Employees missing from the roster produce no rows and are listed in
/// [`Report::unmatched`] instead.
pub fn build_report(totals: &DayTotals, roster: &Roster) -> Report {
    let mut report = Report::default();

    for (employee_id, days) in totals.employees() {
        let Some(record) = roster.get(employee_id) else {
            debug!(employee = employee_id, "employee has logged hours but no roster entry");
            report.unmatched.push(employee_id.to_string());
            continue;
        };

        report.rows.extend(days.iter().map(|(date, hours)| ReportRow {
            employee_id: employee_id.to_string(),
            state_number: record.state_number.clone(),
            job_code: record.job_code.clone(),
            pay_code: record.pay_code.clone(),
            date: *date,
            hours: *hours,
        }));
    }

    report
}

/// Write the header and every report row as CSV.
pub fn write_rows<W: Write>(rows: &[ReportRow], destination: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(destination);
    writer.write_record(REPORT_HEADER)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Build the report and write it to `destination`.
///
/// Returns the IDs of employees left out for lack of a roster entry; an empty
/// list means every employee was reported.
pub fn write_report<W: Write>(
    totals: &DayTotals,
    roster: &Roster,
    destination: W,
) -> Result<Vec<String>> {
    let report = build_report(totals, roster);
    write_rows(&report.rows, destination)?;
    Ok(report.unmatched)
}

/// Write shifts back out in the six-column timesheet layout.
pub fn write_timesheet<W: Write>(header: &[String], shifts: &[Shift], destination: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(destination);
    writer.write_record(header)?;
    for shift in shifts {
        writer.write_record(shift.to_record())?;
    }
    writer.flush()?;
    Ok(())
}
