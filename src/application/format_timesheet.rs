//! Format timesheet use case
//!
//! Orchestrates a full run: choose and validate both inputs, split and
//! aggregate shifts, write the hours report, then tell the user how it went.

use crate::domain::{self, FileKind, RawTable, Roster, Timesheet};
use crate::error::{FormatterError, Result};
use crate::infrastructure::{self, Config, FileChooser, NoticeKind, Notifier};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for a format run
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Output file path (None = derived from the timesheet path)
    pub output: Option<PathBuf>,
}

/// How a run that wrote its report ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every employee with hours was in the roster
    Completed { output: PathBuf },
    /// Report written, but these employees had hours and no roster entry
    PartiallyCompleted {
        output: PathBuf,
        unmatched: Vec<String>,
    },
}

impl Outcome {
    pub fn output(&self) -> &Path {
        match self {
            Outcome::Completed { output } | Outcome::PartiallyCompleted { output, .. } => output,
        }
    }
}

/// Service for formatting a timesheet into the hours report
pub struct FormatTimesheetService<C, N> {
    config: Config,
    chooser: C,
    notifier: N,
}

impl<C: FileChooser, N: Notifier> FormatTimesheetService<C, N> {
    /// Create new format service
    pub fn new(config: Config, chooser: C, notifier: N) -> Self {
        FormatTimesheetService {
            config,
            chooser,
            notifier,
        }
    }

    /// Execute the run
    ///
    /// Returns how the run ended once the report has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user cancels a file choice ([`FormatterError::NoFileSelected`])
    /// - Either file fails validation
    /// - File I/O fails
    ///
    /// Nothing is written when an error is returned before the report stage.
    pub fn execute(&mut self, options: &FormatOptions) -> Result<Outcome> {
        // 1. Timesheet
        let timesheet_table = self.choose_and_validate(FileKind::Timesheet)?;
        let timesheet = domain::load_timesheet(&timesheet_table)?;

        // 2. Roster
        let roster_table = self.choose_and_validate(FileKind::Roster)?;
        let roster = domain::load_roster(&roster_table)?;

        // 3. Report
        let output = options
            .output
            .clone()
            .unwrap_or_else(|| self.config.output_path_for(timesheet_table.source()));
        let unmatched = write_hours_report(timesheet, &roster, &output)?;

        // 4. Tell the user
        if unmatched.is_empty() {
            self.notifier
                .notify(NoticeKind::Info, "Completed", "Done!");
            Ok(Outcome::Completed { output })
        } else {
            self.notifier.notify(
                NoticeKind::Warning,
                "Completed",
                &partial_completion_message(&unmatched),
            );
            Ok(Outcome::PartiallyCompleted { output, unmatched })
        }
    }

    fn choose_and_validate(&mut self, kind: FileKind) -> Result<RawTable> {
        self.notifier.notify(
            NoticeKind::Prompt,
            &format!("Select {}", kind.title()),
            &format!(
                "In the next prompt, select your {}.",
                kind.title().to_uppercase()
            ),
        );

        let path = self
            .chooser
            .choose_input_file(kind)?
            .ok_or(FormatterError::NoFileSelected(kind))?;

        let table = infrastructure::read_table(&path, kind)?;
        let summary = domain::validate(&table)?;
        debug!(
            path = %path.display(),
            data_rows = summary.data_rows,
            skipped = summary.skipped_lines.len(),
            "validated input"
        );
        Ok(table)
    }
}

/// Split, aggregate and write the report. Returns the unmatched employee IDs.
fn write_hours_report(timesheet: Timesheet, roster: &Roster, output: &Path) -> Result<Vec<String>> {
    let shifts_before = timesheet.shift_count();
    let timesheet = domain::split_timesheet(timesheet);
    debug!(
        before = shifts_before,
        after = timesheet.shift_count(),
        "split overnight shifts"
    );

    let totals = domain::aggregate(&timesheet);
    let file = infrastructure::create_output(output)?;
    let unmatched = domain::write_report(&totals, roster, file)?;

    info!(
        path = %output.display(),
        employees = totals.len(),
        unmatched = unmatched.len(),
        "wrote hours report"
    );
    Ok(unmatched)
}

/// Warning text listing employees missing from the roster
pub fn partial_completion_message(unmatched: &[String]) -> String {
    format!(
        "Partial Completion: The following employees have logged time \
        but are not in your employee information file.\n\n{}",
        unmatched.join(", ")
    )
}
