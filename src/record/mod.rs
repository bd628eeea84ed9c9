//! Record Module
//!
//! The student record data model and its flat-file line format.
//!
//! ## Responsibilities
//! - Define the `StudentRecord` value type and its display rendering
//! - Field updates via `RecordPatch` (absent field = leave unchanged)
//! - Normalized field comparison for filters and grouping
//! - Encode/decode records to the one-record-per-line text format

mod student;
pub mod codec;

pub use student::{field_eq, RecordPatch, StudentRecord};
