//! Domain layer - Timesheet records and the formatting pipeline
//!
//! Validator -> loader -> splitter -> aggregator -> report, each a plain
//! function over explicit inputs.

pub mod aggregator;
pub mod clock;
pub mod loader;
pub mod records;
pub mod report;
pub mod splitter;
pub mod table;
pub mod validator;

pub use aggregator::{aggregate, DayLog, DayTotals};
pub use loader::{load_roster, load_shifts, load_timesheet};
pub use records::{EmployeeRecord, Roster, Shift, TimeSheetRow, Timesheet};
pub use report::{build_report, write_report, Report, ReportRow, REPORT_HEADER};
pub use splitter::{split_shift, split_shifts, split_timesheet};
pub use table::{FileKind, RawRow, RawTable};
pub use validator::{validate, ValidationSummary};
