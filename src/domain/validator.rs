//! Input validation
//!
//! Validation gates everything downstream: a file that fails here is never
//! parsed, and no output is written for the run.

use super::clock::{is_digits, parse_date, parse_time};
use super::records::{TimeSheetRow, CLOCK_IN_DATE, CLOCK_IN_TIME, CLOCK_OUT_DATE, CLOCK_OUT_TIME};
use super::table::{FileKind, RawRow, RawTable};
use crate::error::{FormatterError, Result, RowProblem};
use tracing::debug;

/// Result of a successful validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Rows accepted as data
    pub data_rows: usize,
    /// Source lines of timesheet rows skipped by the shape pre-check
    pub skipped_lines: Vec<u64>,
}

/// Validate a table according to its kind.
pub fn validate(table: &RawTable) -> Result<ValidationSummary> {
    match table.kind {
        FileKind::Timesheet => validate_timesheet(table),
        FileKind::Roster => validate_roster(table),
    }
}

/// Reject a missing or blank header, or any header label containing a digit.
///
/// A digit in the first row usually means the file was exported without its
/// header and the first shift landed on line 1.
pub fn validate_header(table: &RawTable) -> Result<()> {
    let has_labels = table.header.as_ref().is_some_and(|labels| {
        !labels.is_empty()
            && labels
                .iter()
                .all(|label| !label.chars().any(|c| c.is_ascii_digit()))
    });

    if has_labels {
        Ok(())
    } else {
        Err(FormatterError::MalformedHeader {
            kind: table.kind,
            path: table.source.clone(),
        })
    }
}

/// Validate the employee roster. The first bad row aborts.
pub fn validate_roster(table: &RawTable) -> Result<ValidationSummary> {
    validate_header(table)?;

    for row in &table.rows {
        if let Some(problem) = roster_row_problem(row) {
            return Err(row_error(table, row.line, problem));
        }
    }

    Ok(ValidationSummary {
        data_rows: table.rows.len(),
        skipped_lines: Vec::new(),
    })
}

/// Validate the timesheet.
///
/// Rows that fail the shape pre-check are skipped, not reported. Rows that
/// pass it must have parseable dates and times; the first failure aborts.
pub fn validate_timesheet(table: &RawTable) -> Result<ValidationSummary> {
    validate_header(table)?;

    let mut summary = ValidationSummary::default();
    for row in &table.rows {
        match TimeSheetRow::from_raw(row) {
            Some(parsed) => {
                if let Some(problem) = timesheet_row_problem(&parsed) {
                    return Err(row_error(table, row.line, problem));
                }
                summary.data_rows += 1;
            }
            None => {
                debug!(line = row.line, "skipping non-data timesheet row");
                summary.skipped_lines.push(row.line);
            }
        }
    }

    Ok(summary)
}

fn roster_row_problem(row: &RawRow) -> Option<RowProblem> {
    let expected = FileKind::Roster.field_count();
    if row.fields.len() != expected {
        return Some(RowProblem::FieldCount {
            expected,
            found: row.fields.len(),
        });
    }
    if !is_digits(row.field(0)) {
        return Some(RowProblem::EmployeeId);
    }
    let state_len = row.field(1).chars().count();
    if state_len != 6 {
        return Some(RowProblem::StateNumber { found: state_len });
    }
    None
}

/// Dates are checked before times, clock-in before clock-out.
fn timesheet_row_problem(row: &TimeSheetRow<'_>) -> Option<RowProblem> {
    let checks = [
        (CLOCK_IN_DATE, row.clock_in_date, true),
        (CLOCK_OUT_DATE, row.clock_out_date, true),
        (CLOCK_IN_TIME, row.clock_in_time, false),
        (CLOCK_OUT_TIME, row.clock_out_time, false),
    ];

    checks.into_iter().find_map(|(index, value, is_date)| {
        let column = index + 1;
        if is_date {
            parse_date(value)
                .is_none()
                .then_some(RowProblem::Date { column })
        } else {
            parse_time(value)
                .is_none()
                .then_some(RowProblem::Time { column })
        }
    })
}

pub(crate) fn row_error(table: &RawTable, line: u64, problem: RowProblem) -> FormatterError {
    FormatterError::MalformedRow {
        kind: table.kind,
        path: table.source.clone(),
        line,
        problem,
    }
}
