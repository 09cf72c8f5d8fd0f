//! Flat-file codec for roster records
//!
//! Line-oriented, tab-separated: name, age, department, position,
//! supervisor (written empty for records without one), then each workday
//! token. `parse_line` and `write_record` are exact inverses for any record
//! that round-trips construct -> serialize -> parse, including the
//! sentinel-supervisor normalization.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::core::record::{Record, RecordError};
use crate::core::roster::Roster;

/// Errors crossing the codec boundary
#[derive(Debug, Error)]
pub enum FlatFileError {
    #[error("failed to read roster file")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Parse one tab-separated line into a record.
///
/// The first five fields are split on tabs (missing trailing fields read as
/// empty, matching the lenient field extraction of the on-disk format); the
/// remainder of the line is split on whitespace into workday tokens.
pub fn parse_line(line: &str) -> Result<Record, RecordError> {
    let mut fields = line.splitn(6, '\t');
    let name = fields.next().unwrap_or("");
    let age = fields.next().unwrap_or("");
    let department = fields.next().unwrap_or("");
    let position = fields.next().unwrap_or("");
    let supervisor = fields.next().unwrap_or("");
    let workdays: Vec<String> = fields
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(str::to_string)
        .collect();

    Record::new(name, age, department, position, supervisor, workdays)
}

/// Write one record as a single tab-separated line.
///
/// The supervisor field is emitted empty when the record carries the
/// no-supervisor sentinel, so a saved roster reloads identically.
pub fn write_record<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    write!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t",
        record.name(),
        record.age(),
        record.department(),
        record.position(),
        if record.has_no_supervisor() {
            ""
        } else {
            record.supervisor()
        },
    )?;
    for (i, day) in record.workdays().iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\t")?;
        }
        writer.write_all(day.as_bytes())?;
    }
    writer.write_all(b"\n")
}

/// Parse every line of `reader` into a fresh roster.
///
/// Blank lines are skipped; the first malformed record aborts the load with
/// its 1-based line number.
pub fn read_roster<R: BufRead>(reader: R) -> Result<Roster, FlatFileError> {
    let mut roster = Roster::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record =
            parse_line(&line).map_err(|source| FlatFileError::Malformed { line: i + 1, source })?;
        roster.insert(record);
    }
    Ok(roster)
}

/// Write every record of `roster` in arena (insertion) order.
pub fn write_roster<W: Write>(writer: &mut W, roster: &Roster) -> io::Result<()> {
    for record in roster.records() {
        write_record(writer, record)?;
    }
    Ok(())
}

/// Load a roster from a file on disk.
pub fn load_path(path: &Path) -> Result<Roster, FlatFileError> {
    let file = File::open(path)?;
    read_roster(BufReader::new(file))
}

/// Save a roster to a file on disk, replacing any existing content.
pub fn save_path(path: &Path, roster: &Roster) -> Result<(), FlatFileError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_roster(&mut writer, roster)?;
    writer.flush()?;
    Ok(())
}
