//! Comma-separated files on disk

use crate::domain::{FileKind, RawRow, RawTable};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Read a whole CSV file into a raw table.
pub fn read_table(path: &Path, kind: FileKind) -> Result<RawTable> {
    let file = File::open(path)?;
    let table = parse_table(path.to_path_buf(), kind, file)?;
    info!(
        path = %path.display(),
        %kind,
        rows = table.rows.len(),
        "read input file"
    );
    Ok(table)
}

/// Parse CSV text from any reader. The first line is the header.
///
/// Rows may have any number of fields; checking that is the validator's job.
/// Fields are kept exactly as written. Blank lines become rows with no fields,
/// and every row carries the physical line it starts on.
pub fn parse_table<R: Read>(source: PathBuf, kind: FileKind, mut reader: R) -> Result<RawTable> {
    let mut text = Vec::new();
    reader.read_to_end(&mut text)?;
    let lines = LineIndex::new(&text);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_slice());

    let mut all_rows = Vec::new();
    let mut record = csv::StringRecord::new();
    let mut cursor = 0;
    while rdr.read_record(&mut record)? {
        // The csv reader skips blank lines without reporting them
        let start = lines.skip_terminators(cursor);
        all_rows.extend(lines.blank_lines(cursor, start).map(blank_row));

        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        all_rows.push(RawRow::new(lines.line_at(start), fields));
        cursor = rdr.position().byte() as usize;
    }
    all_rows.extend(lines.blank_lines(cursor, text.len()).map(blank_row));

    let mut rows = all_rows.into_iter();
    let header = rows.next().map(|row| row.fields);
    Ok(RawTable::new(source, kind, header, rows.collect()))
}

fn blank_row(line: u64) -> RawRow {
    RawRow::new(line, Vec::new())
}

/// Maps byte offsets in the raw text to 1-based line numbers
struct LineIndex<'a> {
    text: &'a [u8],
    /// Offset of every `\n`
    newlines: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a [u8]) -> Self {
        let newlines = text
            .iter()
            .enumerate()
            .filter(|(_, byte)| **byte == b'\n')
            .map(|(offset, _)| offset)
            .collect();
        LineIndex { text, newlines }
    }

    fn line_at(&self, offset: usize) -> u64 {
        self.newlines.partition_point(|&newline| newline < offset) as u64 + 1
    }

    /// First offset at or after `offset` that is not a line terminator
    fn skip_terminators(&self, offset: usize) -> usize {
        let rest = self.text.get(offset..).unwrap_or_default();
        offset
            + rest
                .iter()
                .take_while(|&&byte| matches!(byte, b'\r' | b'\n'))
                .count()
    }

    /// Terminated lines between two offsets that hold nothing but `\r`
    fn blank_lines(&self, from: usize, to: usize) -> impl Iterator<Item = u64> + '_ {
        (self.line_at(from)..self.line_at(to)).filter(move |&line| self.is_blank(line))
    }

    fn is_blank(&self, line: u64) -> bool {
        let index = (line - 1) as usize;
        let Some(&end) = self.newlines.get(index) else {
            return false;
        };
        let start = match index {
            0 => 0,
            _ => self.newlines[index - 1] + 1,
        };
        self.text[start..end].iter().all(|&byte| byte == b'\r')
    }
}

/// Create (or truncate) an output file for writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
