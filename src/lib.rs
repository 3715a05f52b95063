//! timesheet-formatter - Punch-clock timesheet reformatter
//!
//! Reads a timesheet export and an employee roster, splits shifts that cross
//! midnight, totals hours per employee per day and writes a report joined
//! with each employee's state number, job code and pay code.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{FormatterError, Result};
