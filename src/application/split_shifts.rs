//! Split overnight shifts use case
//!
//! Rewrites a timesheet so that no shift crosses midnight, keeping the
//! timesheet layout. Useful for checking what the hours report will be built
//! from.

use crate::domain::{self, report::write_timesheet, FileKind};
use crate::error::{FormatterError, Result};
use crate::infrastructure::{self, Config};
use std::path::{Path, PathBuf};
use tracing::info;

/// What a split run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub output: PathBuf,
    pub shifts_read: usize,
    pub shifts_written: usize,
}

/// Split every overnight shift in `timesheet` and write the result.
///
/// Output goes to `output` when given, otherwise next to the timesheet using
/// the configured separated suffix.
pub fn split_file(config: &Config, timesheet: &Path, output: Option<&Path>) -> Result<SplitSummary> {
    let table = infrastructure::read_table(timesheet, FileKind::Timesheet)?;
    domain::validate(&table)?;

    let header = table.header.clone().ok_or_else(|| FormatterError::MalformedHeader {
        kind: FileKind::Timesheet,
        path: timesheet.to_path_buf(),
    })?;
    let shifts = domain::load_shifts(&table)?;
    let shifts_read = shifts.len();
    let split = domain::split_shifts(shifts);

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.separated_path_for(timesheet));
    let file = infrastructure::create_output(&output)?;
    write_timesheet(&header, &split, file)?;

    info!(
        path = %output.display(),
        shifts_read,
        shifts_written = split.len(),
        "wrote split timesheet"
    );
    Ok(SplitSummary {
        output,
        shifts_read,
        shifts_written: split.len(),
    })
}
