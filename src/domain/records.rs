//! Typed records produced from validated rows

use super::clock::{self, is_digits, parse_hours};
use super::table::RawRow;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Timesheet column positions
pub const EMPLOYEE_ID: usize = 0;
pub const CLOCK_IN_DATE: usize = 1;
pub const CLOCK_IN_TIME: usize = 2;
pub const CLOCK_OUT_DATE: usize = 3;
pub const CLOCK_OUT_TIME: usize = 4;
pub const HOURS_WORKED: usize = 5;

/// A timesheet row that passed the shape pre-check
///
/// Borrowed from its [`RawRow`]; the date and time fields are still text at
/// this point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSheetRow<'a> {
    pub line: u64,
    pub employee_id: &'a str,
    pub clock_in_date: &'a str,
    pub clock_in_time: &'a str,
    pub clock_out_date: &'a str,
    pub clock_out_time: &'a str,
    pub hours: f64,
}

impl<'a> TimeSheetRow<'a> {
    /// Apply the shape pre-check: six fields, a digit employee ID and a
    /// numeric hours field. Rows failing it are not data rows.
    pub fn from_raw(row: &'a RawRow) -> Option<Self> {
        if row.fields.len() != 6 || !is_digits(row.field(EMPLOYEE_ID)) {
            return None;
        }
        let hours = parse_hours(row.field(HOURS_WORKED))?;

        Some(TimeSheetRow {
            line: row.line,
            employee_id: row.field(EMPLOYEE_ID),
            clock_in_date: row.field(CLOCK_IN_DATE),
            clock_in_time: row.field(CLOCK_IN_TIME),
            clock_out_date: row.field(CLOCK_OUT_DATE),
            clock_out_time: row.field(CLOCK_OUT_TIME),
            hours,
        })
    }
}

/// One continuous clock-in/clock-out interval for one employee
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub employee_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Hours credited to this shift
    pub hours: f64,
}

impl Shift {
    pub fn new(employee_id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime, hours: f64) -> Self {
        Shift {
            employee_id: employee_id.into(),
            start,
            end,
            hours,
        }
    }

    /// Calendar date the shift is counted on
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn crosses_midnight(&self) -> bool {
        self.start.date() != self.end.date()
    }

    /// The six timesheet fields for this shift
    pub fn to_record(&self) -> [String; 6] {
        [
            self.employee_id.clone(),
            clock::format_date(self.start.date()),
            clock::format_time(self.start.time()),
            clock::format_date(self.end.date()),
            clock::format_time(self.end.time()),
            clock::format_hours(self.hours),
        ]
    }
}

/// Roster metadata for one employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub employee_id: String,
    /// Always six characters
    pub state_number: String,
    pub job_code: String,
    pub pay_code: String,
}

impl EmployeeRecord {
    /// Metadata fields in roster column order
    pub fn metadata(&self) -> [&str; 3] {
        [&self.state_number, &self.job_code, &self.pay_code]
    }
}

/// Shifts grouped by employee
///
/// Employees keep the order in which they first appear in the timesheet and
/// each employee's shifts keep their row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timesheet {
    employees: Vec<(String, Vec<Shift>)>,
    index: HashMap<String, usize>,
}

impl Timesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shift to its employee's sequence
    pub fn push(&mut self, shift: Shift) {
        match self.index.get(&shift.employee_id) {
            Some(&pos) => self.employees[pos].1.push(shift),
            None => {
                self.index
                    .insert(shift.employee_id.clone(), self.employees.len());
                self.employees.push((shift.employee_id.clone(), vec![shift]));
            }
        }
    }

    /// Employees and their shifts in first-appearance order
    pub fn employees(&self) -> impl Iterator<Item = (&str, &[Shift])> {
        self.employees
            .iter()
            .map(|(id, shifts)| (id.as_str(), shifts.as_slice()))
    }

    pub fn shifts_for(&self, employee_id: &str) -> Option<&[Shift]> {
        self.index
            .get(employee_id)
            .map(|&pos| self.employees[pos].1.as_slice())
    }

    /// Number of employees
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn shift_count(&self) -> usize {
        self.employees.iter().map(|(_, shifts)| shifts.len()).sum()
    }

    /// Rebuild every employee's sequence with `f`, keeping employee order
    pub fn map_shifts<F>(self, mut f: F) -> Self
    where
        F: FnMut(Vec<Shift>) -> Vec<Shift>,
    {
        let employees = self
            .employees
            .into_iter()
            .map(|(id, shifts)| (id, f(shifts)))
            .collect();
        Timesheet {
            employees,
            index: self.index,
        }
    }
}

impl FromIterator<Shift> for Timesheet {
    fn from_iter<I: IntoIterator<Item = Shift>>(iter: I) -> Self {
        let mut timesheet = Timesheet::new();
        for shift in iter {
            timesheet.push(shift);
        }
        timesheet
    }
}

/// Employee metadata keyed by employee ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: HashMap<String, EmployeeRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; a repeated employee ID replaces the earlier row
    pub fn insert(&mut self, record: EmployeeRecord) {
        self.records.insert(record.employee_id.clone(), record);
    }

    pub fn get(&self, employee_id: &str) -> Option<&EmployeeRecord> {
        self.records.get(employee_id)
    }

    pub fn contains(&self, employee_id: &str) -> bool {
        self.records.contains_key(employee_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<EmployeeRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = EmployeeRecord>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for record in iter {
            roster.insert(record);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M").unwrap()
    }

    fn raw(line: u64, fields: &[&str]) -> RawRow {
        RawRow::new(line, fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_shape_check_accepts_integer_and_decimal_hours() {
        let row = raw(2, &["1001", "01/15/2024", "09:00 AM", "01/15/2024", "05:00 PM", "8"]);
        let parsed = TimeSheetRow::from_raw(&row).unwrap();
        assert_eq!(parsed.employee_id, "1001");
        assert_eq!(parsed.hours, 8.0);
        assert_eq!(parsed.line, 2);

        let row = raw(3, &["1001", "x", "y", "z", "w", "7.75"]);
        assert_eq!(TimeSheetRow::from_raw(&row).unwrap().hours, 7.75);
    }

    #[test]
    fn test_shape_check_rejects_non_data_rows() {
        assert!(TimeSheetRow::from_raw(&raw(2, &[])).is_none());
        assert!(TimeSheetRow::from_raw(&raw(2, &["", "", "", "", "", ""])).is_none());
        assert!(TimeSheetRow::from_raw(&raw(2, &["A1", "d", "t", "d", "t", "4"])).is_none());
        assert!(TimeSheetRow::from_raw(&raw(2, &["1001", "d", "t", "d", "t", "four"])).is_none());
        assert!(TimeSheetRow::from_raw(&raw(2, &["1001", "d", "t", "d", "t"])).is_none());
    }

    #[test]
    fn test_shift_to_record() {
        let shift = Shift::new("1001", at("2024-01-15", "22:00"), at("2024-01-15", "23:59"), 2.0);
        assert_eq!(
            shift.to_record(),
            [
                "1001".to_string(),
                "01/15/2024".to_string(),
                "10:00 PM".to_string(),
                "01/15/2024".to_string(),
                "11:59 PM".to_string(),
                "2.0".to_string(),
            ]
        );
        assert!(!shift.crosses_midnight());
    }

    #[test]
    fn test_timesheet_keeps_first_appearance_order() {
        let timesheet: Timesheet = vec![
            Shift::new("2002", at("2024-01-15", "09:00"), at("2024-01-15", "10:00"), 1.0),
            Shift::new("1001", at("2024-01-15", "09:00"), at("2024-01-15", "11:00"), 2.0),
            Shift::new("2002", at("2024-01-16", "09:00"), at("2024-01-16", "12:00"), 3.0),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = timesheet.employees().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["2002", "1001"]);
        assert_eq!(timesheet.shift_count(), 3);

        let hours: Vec<f64> = timesheet
            .shifts_for("2002")
            .unwrap()
            .iter()
            .map(|s| s.hours)
            .collect();
        assert_eq!(hours, vec![1.0, 3.0]);
    }

    #[test]
    fn test_roster_last_row_wins() {
        let roster: Roster = vec![
            EmployeeRecord {
                employee_id: "1001".to_string(),
                state_number: "111111".to_string(),
                job_code: "OLD".to_string(),
                pay_code: "P".to_string(),
            },
            EmployeeRecord {
                employee_id: "1001".to_string(),
                state_number: "222222".to_string(),
                job_code: "NEW".to_string(),
                pay_code: "P".to_string(),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("1001").unwrap().metadata(), ["222222", "NEW", "P"]);
    }
}
