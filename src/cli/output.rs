//! Output formatting utilities

use crate::application::SplitSummary;
use crate::domain::ValidationSummary;
use std::path::Path;

/// Format the result of validating one file
pub fn format_validation(path: &Path, summary: &ValidationSummary) -> String {
    let mut output = format!("{}: OK ({} data rows", path.display(), summary.data_rows);
    if !summary.skipped_lines.is_empty() {
        let lines: Vec<String> = summary
            .skipped_lines
            .iter()
            .map(|line| line.to_string())
            .collect();
        output.push_str(&format!(
            ", skipped non-data lines {}",
            lines.join(", ")
        ));
    }
    output.push(')');
    output
}

/// Format the result of a split run
pub fn format_split_summary(summary: &SplitSummary) -> String {
    format!(
        "Wrote {} shifts ({} read) to {}",
        summary.shifts_written,
        summary.shifts_read,
        summary.output.display()
    )
}
