//! Line codec
//!
//! Encoding and decoding for the flat data file.
//!
//! ## Line Format
//!
//! ```text
//! id,firstName,lastName,course,year,cwa,status,earnedCredits
//! ```
//!
//! One record per line, exactly 8 comma-separated fields, no header line and
//! no quoting or escaping. A comma inside any field corrupts the line; that
//! is a constraint of the format, not something the codec repairs.
//!
//! Decoding distinguishes two failure shapes:
//! - wrong field count → `Ok(None)`, the caller skips the line
//! - unparseable numeric field → `Err`, which aborts a whole load

use crate::error::{Result, RosterError};
use super::StudentRecord;

/// Field delimiter
pub const DELIMITER: char = ',';

/// Exact number of fields per line
pub const FIELD_COUNT: usize = 8;

/// Encode a record as one data-file line (no trailing newline)
pub fn encode_line(record: &StudentRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        record.id,
        record.first_name,
        record.last_name,
        record.course,
        record.year,
        record.cwa,
        record.status,
        record.earned_credits
    )
}

/// Decode one data-file line
///
/// Returns `Ok(None)` when the line does not split into exactly
/// [`FIELD_COUNT`] fields. Numeric fields that fail to parse return an
/// error instead; year and credit values outside the interactive entry
/// ranges are accepted as-is (entry constraints are not re-validated here).
pub fn decode_line(line: &str) -> Result<Option<StudentRecord>> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Ok(None);
    }

    let year = parse_field(fields[4], "year")?;
    let cwa = parse_field(fields[5], "cwa")?;
    let earned_credits = parse_field(fields[7], "earnedCredits")?;

    Ok(Some(StudentRecord {
        id: fields[0].to_string(),
        first_name: fields[1].to_string(),
        last_name: fields[2].to_string(),
        course: fields[3].to_string(),
        year,
        cwa,
        status: fields[6].to_string(),
        earned_credits,
    }))
}

/// Parse one numeric field, naming the field in the error
fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| RosterError::LineDecode(format!("invalid {name} value '{raw}'")))
}
