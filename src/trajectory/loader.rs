//! Trajectory loading from comma-separated record files
//!
//! Parses the integrator's output format (`p1,p2,theta1,theta2` per text
//! line, no header row) into a [`Trajectory`]. A record with the wrong
//! field count or a non-numeric field aborts the load with no partial
//! result; an empty source is a valid zero-frame trajectory

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::SimError;
use crate::trajectory::states::{Record, Trajectory};

/// Number of generalized coordinates per record
pub const RECORD_FIELDS: usize = 4;

/// Parse comma-separated records from `source` into a [`Trajectory`]
///
/// Each non-empty line must hold exactly four decimal numbers in the fixed
/// positional order `p1,p2,theta1,theta2`. The field-count check runs
/// before any numeric parsing, so a short or long record reports
/// [`SimError::Schema`] even when its fields are garbage
pub fn load<R: Read>(source: R) -> Result<Trajectory, SimError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // 1-based source line, falling back to the record index
        let line = row.position().map_or(index as u64 + 1, |p| p.line());

        if row.len() != RECORD_FIELDS {
            return Err(SimError::Schema {
                line,
                count: row.len(),
            });
        }

        let mut fields = [0.0_f64; RECORD_FIELDS];
        for (field, raw) in row.iter().enumerate() {
            fields[field] = raw.parse().map_err(|_| SimError::Parse {
                line,
                field,
                value: raw.to_string(),
            })?;
        }

        records.push(Record {
            p1: fields[0],
            p2: fields[1],
            theta1: fields[2],
            theta2: fields[3],
        });
    }

    Ok(Trajectory { records })
}

/// Open `path` and load it as a trajectory
///
/// The file handle lives only for the duration of the parse and is closed
/// whether the load succeeds or fails
pub fn load_path(path: &Path) -> Result<Trajectory, SimError> {
    let file = File::open(path)?;
    load(BufReader::new(file))
}
