//! Field prompts
//!
//! Prompt-and-read helpers for the add/edit flows. Numeric prompts loop
//! until valid input is supplied; free-text prompts accept anything,
//! including the empty string. The `optional_*` variants are the edit-mode
//! forms where blank input means "keep the current value".
//!
//! End of input anywhere returns `None`, which callers treat as "abandon
//! the operation" (add) or "keep" (edit).

use std::io::{BufRead, Write};

use crate::error::Result;

/// Read one line with the trailing newline stripped. `None` on end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompt for a free-text field. No validation; empty input is accepted.
pub(crate) fn text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

/// Prompt for the year of study until a value in [1,4] is supplied
pub(crate) fn year<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<u8>> {
    loop {
        let Some(raw) = text(input, output, "Enter Year: ")? else {
            return Ok(None);
        };
        match parse_year(&raw) {
            Parsed::Value(year) => return Ok(Some(year)),
            Parsed::OutOfRange => writeln!(output, "Year must be between 1 and 4")?,
            Parsed::Invalid => {
                writeln!(output, "Invalid input. Please enter a numeric value for Year.")?
            }
        }
    }
}

/// Prompt for the CWA until it parses as a number (no range constraint)
pub(crate) fn cwa<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<f64>> {
    loop {
        let Some(raw) = text(input, output, "Enter CWA: ")? else {
            return Ok(None);
        };
        match raw.trim().parse() {
            Ok(cwa) => return Ok(Some(cwa)),
            Err(_) => writeln!(output, "Invalid input. Please enter a number for CWA.")?,
        }
    }
}

/// Prompt for earned credits until a non-negative integer is supplied
pub(crate) fn credits<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<u32>> {
    loop {
        let Some(raw) = text(input, output, "Enter Earned Credits: ")? else {
            return Ok(None);
        };
        match parse_credits(&raw) {
            Parsed::Value(credits) => return Ok(Some(credits)),
            Parsed::OutOfRange => writeln!(output, "Credits cannot be negative.")?,
            Parsed::Invalid => {
                writeln!(output, "Invalid input. Please enter a numeric value for Credits.")?
            }
        }
    }
}

// =============================================================================
// Edit-mode Prompts (blank = keep current value)
// =============================================================================

/// Free-text edit prompt: blank or end of input keeps the current value
pub(crate) fn optional_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    match read_line(input)? {
        Some(raw) if !raw.is_empty() => Ok(Some(raw)),
        _ => Ok(None),
    }
}

/// Year edit prompt: blank keeps, anything else retries until in [1,4]
pub(crate) fn optional_year<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: u8,
) -> Result<Option<u8>> {
    let label = format!("Enter new Year ({current}): ");
    loop {
        let Some(raw) = optional_text(input, output, &label)? else {
            return Ok(None);
        };
        match parse_year(&raw) {
            Parsed::Value(year) => return Ok(Some(year)),
            Parsed::OutOfRange => writeln!(output, "Year must be between 1 and 4")?,
            Parsed::Invalid => {
                writeln!(output, "Invalid input. Please enter a numeric value for Year.")?
            }
        }
    }
}

/// CWA edit prompt: blank keeps, anything else retries until numeric
pub(crate) fn optional_cwa<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: f64,
) -> Result<Option<f64>> {
    let label = format!("Enter new CWA ({current}): ");
    loop {
        let Some(raw) = optional_text(input, output, &label)? else {
            return Ok(None);
        };
        match raw.trim().parse() {
            Ok(cwa) => return Ok(Some(cwa)),
            Err(_) => writeln!(output, "Invalid input. Please enter a number for CWA.")?,
        }
    }
}

/// Credits edit prompt: blank keeps, anything else retries until valid
pub(crate) fn optional_credits<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: u32,
) -> Result<Option<u32>> {
    let label = format!("Enter new Earned Credits ({current}): ");
    loop {
        let Some(raw) = optional_text(input, output, &label)? else {
            return Ok(None);
        };
        match parse_credits(&raw) {
            Parsed::Value(credits) => return Ok(Some(credits)),
            Parsed::OutOfRange => writeln!(output, "Credits cannot be negative.")?,
            Parsed::Invalid => {
                writeln!(output, "Invalid input. Please enter a numeric value for Credits.")?
            }
        }
    }
}

// =============================================================================
// Parse Helpers
// =============================================================================

/// Outcome of validating one numeric field
enum Parsed<T> {
    Value(T),
    OutOfRange,
    Invalid,
}

/// Year must be an integer in [1,4]; negatives are out of range, not invalid
fn parse_year(raw: &str) -> Parsed<u8> {
    match raw.trim().parse::<i32>() {
        Ok(year) if (1..=4).contains(&year) => Parsed::Value(year as u8),
        Ok(_) => Parsed::OutOfRange,
        Err(_) => Parsed::Invalid,
    }
}

/// Credits must be a non-negative integer
fn parse_credits(raw: &str) -> Parsed<u32> {
    match raw.trim().parse::<i64>() {
        Ok(credits) if credits < 0 => Parsed::OutOfRange,
        Ok(credits) => match u32::try_from(credits) {
            Ok(credits) => Parsed::Value(credits),
            Err(_) => Parsed::Invalid,
        },
        Err(_) => Parsed::Invalid,
    }
}
