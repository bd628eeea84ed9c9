//! Student record definitions
//!
//! Records are plain value types owned by the store. There is no interior
//! mutation: edits go through [`RecordPatch`] applied by the store's
//! update-by-id operation.

use std::fmt;

/// One entry in the roster
///
/// The `id` is externally supplied and informally unique: nothing enforces
/// distinctness, and lookups match the first record with a given id.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    /// Externally supplied identifier, used as the lookup key for edits
    pub id: String,

    pub first_name: String,
    pub last_name: String,

    /// Free-form program name; compared trimmed and case-insensitively
    pub course: String,

    /// Year of study, constrained to [1,4] at interactive entry only
    pub year: u8,

    /// Cumulative weighted average, unconstrained range
    pub cwa: f64,

    /// Free-form status (e.g. enrolled/graduated/withdrawn); compared
    /// trimmed and case-insensitively
    pub status: String,

    pub earned_credits: u32,
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {} {}, Course: {}, Year: {}, CWA: {}, Status: {}, Credits: {}",
            self.id,
            self.first_name,
            self.last_name,
            self.course,
            self.year,
            self.cwa,
            self.status,
            self.earned_credits
        )
    }
}

/// Normalized field equality: trimmed, case-insensitive
///
/// Used everywhere course/status values are compared or grouped.
pub fn field_eq(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// A partial update to a record
///
/// `None` fields are left unchanged. The id is the lookup key and is never
/// patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub course: Option<String>,
    pub year: Option<u8>,
    pub cwa: Option<f64>,
    pub status: Option<String>,
    pub earned_credits: Option<u32>,
}

impl RecordPatch {
    /// True if no field would change
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.course.is_none()
            && self.year.is_none()
            && self.cwa.is_none()
            && self.status.is_none()
            && self.earned_credits.is_none()
    }

    /// Overwrite every field for which the patch carries a value
    pub fn apply(&self, record: &mut StudentRecord) {
        if let Some(first_name) = &self.first_name {
            record.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            record.last_name = last_name.clone();
        }
        if let Some(course) = &self.course {
            record.course = course.clone();
        }
        if let Some(year) = self.year {
            record.year = year;
        }
        if let Some(cwa) = self.cwa {
            record.cwa = cwa;
        }
        if let Some(status) = &self.status {
            record.status = status.clone();
        }
        if let Some(earned_credits) = self.earned_credits {
            record.earned_credits = earned_credits;
        }
    }
}
