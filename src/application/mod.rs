//! Application layer - Use cases and orchestration

pub mod format_timesheet;
pub mod split_shifts;
pub mod validate_files;

pub use format_timesheet::{FormatOptions, FormatTimesheetService, Outcome};
pub use split_shifts::{split_file, SplitSummary};
pub use validate_files::validate_file;
