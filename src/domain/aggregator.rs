//! Per-day hour totals

use super::records::Timesheet;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Hours per calendar date for one employee, dates ascending
pub type DayLog = BTreeMap<NaiveDate, f64>;

/// Day logs for every employee, in timesheet order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTotals {
    employees: Vec<(String, DayLog)>,
}

impl DayTotals {
    pub fn employees(&self) -> impl Iterator<Item = (&str, &DayLog)> {
        self.employees.iter().map(|(id, log)| (id.as_str(), log))
    }

    pub fn get(&self, employee_id: &str) -> Option<&DayLog> {
        self.employees
            .iter()
            .find(|(id, _)| id == employee_id)
            .map(|(_, log)| log)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Sum shift hours by employee and by the date each shift starts on.
///
/// Expects split shifts. Totals are not rounded here.
pub fn aggregate(timesheet: &Timesheet) -> DayTotals {
    let employees = timesheet
        .employees()
        .map(|(id, shifts)| {
            let mut log = DayLog::new();
            for shift in shifts {
                *log.entry(shift.date()).or_insert(0.0) += shift.hours;
            }
            (id.to_string(), log)
        })
        .collect();

    DayTotals { employees }
}
