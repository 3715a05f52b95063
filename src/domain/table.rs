//! Raw tabular input as read from a comma-separated file

use std::fmt;
use std::path::{Path, PathBuf};

/// The two input files a run consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Punch-clock export: one row per shift
    Timesheet,
    /// Employee metadata: one row per employee
    Roster,
}

impl FileKind {
    /// Number of fields every data row must have
    pub fn field_count(&self) -> usize {
        match self {
            FileKind::Timesheet => 6,
            FileKind::Roster => 4,
        }
    }

    /// Header labels shown to the user when a header is missing
    pub fn expected_labels(&self) -> &'static str {
        match self {
            FileKind::Timesheet => {
                "Employee Id,Clock-In Date,Clock-In Time,Clock-Out Date,Clock-Out Time,Hours Worked"
            }
            FileKind::Roster => "Employee ID,State Number,Job Code,Pay Code",
        }
    }

    /// Title used when asking the user to pick this file
    pub fn title(&self) -> &'static str {
        match self {
            FileKind::Timesheet => "Timesheet Information",
            FileKind::Roster => "Employee Information",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Timesheet => write!(f, "timesheet"),
            FileKind::Roster => write!(f, "employee"),
        }
    }
}

/// One data row with the source line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line in the source file (the header is line 1)
    pub line: u64,
    pub fields: Vec<String>,
}

impl RawRow {
    pub fn new(line: u64, fields: Vec<String>) -> Self {
        RawRow { line, fields }
    }

    /// Field at `index`, or "" when the row is too short
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Header plus data rows of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub source: PathBuf,
    pub kind: FileKind,
    /// `None` when the file had no rows at all
    pub header: Option<Vec<String>>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(
        source: PathBuf,
        kind: FileKind,
        header: Option<Vec<String>>,
        rows: Vec<RawRow>,
    ) -> Self {
        RawTable {
            source,
            kind,
            header,
            rows,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Build a table from plain comma-joined lines; the first line is the header.
/// An empty line becomes a row with no fields.
#[cfg(test)]
pub(crate) fn table(kind: FileKind, lines: &[&str]) -> RawTable {
    let mut records = lines.iter().enumerate().map(|(idx, line)| {
        let fields = match *line {
            "" => Vec::new(),
            _ => line.split(',').map(str::to_string).collect(),
        };
        RawRow::new(idx as u64 + 1, fields)
    });
    let header = records.next().map(|row| row.fields);
    RawTable::new(
        PathBuf::from(format!("{}.csv", kind)),
        kind,
        header,
        records.collect(),
    )
}
