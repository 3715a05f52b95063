//! Error types for timesheet-formatter

use crate::domain::FileKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What exactly is wrong with a data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowProblem {
    /// Row does not have the number of fields the file format requires
    FieldCount { expected: usize, found: usize },
    /// Employee ID is empty or contains something other than digits
    EmployeeId,
    /// State number is not exactly six characters
    StateNumber { found: usize },
    /// Date column (1-based) is not mm/dd/yyyy
    Date { column: usize },
    /// Time column (1-based) is not hh:mm AM/PM
    Time { column: usize },
}

impl RowProblem {
    /// The format the offending column should have, when there is one
    pub fn expected_format(&self) -> Option<&'static str> {
        match self {
            RowProblem::Date { .. } => Some("mm/dd/yyyy"),
            RowProblem::Time { .. } => Some("hh:mm pm"),
            _ => None,
        }
    }
}

impl fmt::Display for RowProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowProblem::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            RowProblem::EmployeeId => write!(f, "employee ID must contain only digits"),
            RowProblem::StateNumber { found } => write!(
                f,
                "state number must be exactly 6 characters, found {}",
                found
            ),
            RowProblem::Date { column } | RowProblem::Time { column } => {
                write!(f, "column {}", column)
            }
        }
    }
}

/// Main error type for timesheet-formatter
#[derive(Debug, Error)]
pub enum FormatterError {
    #[error("The {kind} file {} does not have proper labels on line 1", path.display())]
    MalformedHeader { kind: FileKind, path: PathBuf },

    #[error("Incorrect {kind} info on line {line} of {}: {problem}", path.display())]
    MalformedRow {
        kind: FileKind,
        path: PathBuf,
        line: u64,
        problem: RowProblem,
    },

    #[error("No {0} file selected")]
    NoFileSelected(FileKind),

    #[error("Expected {expected} data but {} was read as {found} data", path.display())]
    WrongFileKind {
        expected: FileKind,
        found: FileKind,
        path: PathBuf,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl FormatterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FormatterError::NoFileSelected(_) => 0,
            FormatterError::MalformedHeader { .. } => 2,
            FormatterError::MalformedRow { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FormatterError::MalformedHeader { kind, .. } => {
                format!(
                    "{}\n\n\
                    The first row of the csv file should have the following labels on line 1:\n\n\
                    {}",
                    self,
                    kind.expected_labels()
                )
            }
            FormatterError::MalformedRow { kind, problem, .. } => match problem.expected_format() {
                Some(format) => format!("{}.\n\nCorrect format should be {}.", self, format),
                None if *kind == FileKind::Roster => format!(
                    "{}\n\n\
                    Each employee row needs exactly these fields:\n\
                    • Employee ID (digits only)\n\
                    • State Number (exactly 6 characters)\n\
                    • Job Code\n\
                    • Pay Code",
                    self
                ),
                None => self.to_string(),
            },
            FormatterError::TomlDeserialize(e) if e.to_string().contains("unknown field") => {
                format!(
                    "{}\n\n\
                    Valid keys: output_suffix, separated_suffix\n\
                    Example: output_suffix = \"_output.csv\"",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FormatterError
pub type Result<T> = std::result::Result<T, FormatterError>;
