//! Validate input files use case

use crate::domain::{self, FileKind, ValidationSummary};
use crate::error::Result;
use crate::infrastructure;
use std::path::Path;

/// Validate one input file without producing any output.
pub fn validate_file(path: &Path, kind: FileKind) -> Result<ValidationSummary> {
    let table = infrastructure::read_table(path, kind)?;
    domain::validate(&table)
}
