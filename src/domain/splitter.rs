//! Midnight splitting
//!
//! A shift whose clock-out lands on a later calendar date than its clock-in
//! becomes two shifts, one per date:
//!
//! - the first runs from clock-in to 23:59 on the clock-in date and is credited
//!   with the hours up to midnight;
//! - the second runs from 00:00 on the clock-out date to clock-out and is
//!   credited with the hours after midnight.
//!
//! Both credits are measured against the same midnight and rounded to
//! hundredths, so the boundary minute is never counted twice. The 23:59 stamp
//! is only what the first segment displays as its end.

use super::clock::{hours_between, midnight, round_hours};
use super::records::{Shift, Timesheet};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Last displayed minute of a calendar date
fn last_minute(date: NaiveDate) -> NaiveDateTime {
    midnight(date) + Duration::minutes(23 * 60 + 59)
}

/// Split one shift into the single-date shifts it covers.
///
/// Shifts that stay on one date come back untouched with their reported hours.
/// Shifts that span more than one midnight are not supported: they are split
/// once, at the clock-out date's midnight, and a warning is logged.
pub fn split_shift(shift: Shift) -> Vec<Shift> {
    let start_date = shift.start.date();
    let end_date = shift.end.date();

    if end_date <= start_date {
        if end_date < start_date {
            warn!(
                employee = %shift.employee_id,
                start = %shift.start,
                end = %shift.end,
                "clock-out is before clock-in; leaving shift as reported"
            );
        }
        return vec![shift];
    }

    if (end_date - start_date).num_days() > 1 {
        warn!(
            employee = %shift.employee_id,
            start = %shift.start,
            end = %shift.end,
            "shift spans more than one midnight; only the last midnight is split"
        );
    }

    let boundary = midnight(end_date);
    let before = Shift::new(
        shift.employee_id.clone(),
        shift.start,
        last_minute(start_date),
        round_hours(hours_between(shift.start, boundary)),
    );
    let after = Shift::new(
        shift.employee_id,
        boundary,
        shift.end,
        round_hours(hours_between(boundary, shift.end)),
    );

    vec![before, after]
}

/// Split every shift, keeping sequence order.
pub fn split_shifts(shifts: Vec<Shift>) -> Vec<Shift> {
    shifts.into_iter().flat_map(split_shift).collect()
}

/// Split every employee's shifts.
pub fn split_timesheet(timesheet: Timesheet) -> Timesheet {
    timesheet.map_shifts(split_shifts)
}
