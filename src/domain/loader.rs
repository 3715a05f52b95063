//! Turn validated tables into typed records

use super::clock::{parse_date, parse_time};
use super::records::{
    EmployeeRecord, Roster, Shift, TimeSheetRow, Timesheet, CLOCK_IN_DATE, CLOCK_IN_TIME,
    CLOCK_OUT_DATE, CLOCK_OUT_TIME,
};
use super::table::{FileKind, RawTable};
use super::validator::row_error;
use crate::error::{FormatterError, Result, RowProblem};
use tracing::{debug, trace};

/// Load the employee roster.
///
/// Expects a table that already passed [`validate_roster`](super::validator::validate_roster).
pub fn load_roster(table: &RawTable) -> Result<Roster> {
    expect_kind(table, FileKind::Roster)?;

    let mut roster = Roster::new();
    for row in &table.rows {
        let [employee_id, state_number, job_code, pay_code] = row.fields.as_slice() else {
            return Err(row_error(
                table,
                row.line,
                RowProblem::FieldCount {
                    expected: FileKind::Roster.field_count(),
                    found: row.fields.len(),
                },
            ));
        };
        roster.insert(EmployeeRecord {
            employee_id: employee_id.clone(),
            state_number: state_number.clone(),
            job_code: job_code.clone(),
            pay_code: pay_code.clone(),
        });
    }

    debug!(
        source = %table.source.display(),
        employees = roster.len(),
        "loaded roster"
    );
    Ok(roster)
}

/// Load every timesheet shift in file order.
///
/// Rows the validator treats as non-data are skipped here as well.
pub fn load_shifts(table: &RawTable) -> Result<Vec<Shift>> {
    expect_kind(table, FileKind::Timesheet)?;

    let mut shifts = Vec::with_capacity(table.rows.len());
    for row in table.rows.iter().filter_map(TimeSheetRow::from_raw) {
        let shift = parse_shift(&row).map_err(|problem| row_error(table, row.line, problem))?;
        trace!(
            employee = %shift.employee_id,
            start = %shift.start,
            end = %shift.end,
            hours = shift.hours,
            "parsed shift"
        );
        shifts.push(shift);
    }

    debug!(
        source = %table.source.display(),
        shifts = shifts.len(),
        "loaded timesheet"
    );
    Ok(shifts)
}

/// Load the timesheet grouped by employee.
pub fn load_timesheet(table: &RawTable) -> Result<Timesheet> {
    Ok(load_shifts(table)?.into_iter().collect())
}

fn parse_shift(row: &TimeSheetRow<'_>) -> std::result::Result<Shift, RowProblem> {
    let date = |value: &str, index: usize| {
        parse_date(value).ok_or(RowProblem::Date { column: index + 1 })
    };
    let time = |value: &str, index: usize| {
        parse_time(value).ok_or(RowProblem::Time { column: index + 1 })
    };

    let start_date = date(row.clock_in_date, CLOCK_IN_DATE)?;
    let end_date = date(row.clock_out_date, CLOCK_OUT_DATE)?;
    let start = start_date.and_time(time(row.clock_in_time, CLOCK_IN_TIME)?);
    let end = end_date.and_time(time(row.clock_out_time, CLOCK_OUT_TIME)?);

    Ok(Shift::new(row.employee_id, start, end, row.hours))
}

fn expect_kind(table: &RawTable, kind: FileKind) -> Result<()> {
    if table.kind == kind {
        Ok(())
    } else {
        Err(FormatterError::WrongFileKind {
            expected: kind,
            found: table.kind,
            path: table.source.clone(),
        })
    }
}
