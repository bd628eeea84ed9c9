//! Query operations
//!
//! Filter and aggregate scans over the roster. All scans are linear, run in
//! insertion order, and borrow records rather than copying them. An empty
//! result is an informational outcome, never an error.

use crate::record::{field_eq, StudentRecord};
use super::RosterStore;

/// Per-course CWA aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct CourseAverage {
    /// Display label: the first-seen trimmed spelling of the course
    pub course: String,

    /// Arithmetic mean of CWA over records matching the course
    pub average: f64,

    /// How many records contributed to the mean (always >= 1)
    pub students: usize,
}

impl RosterStore {
    /// Records whose course matches, trimmed and case-insensitive
    pub fn filter_by_course(&self, course: &str) -> Vec<&StudentRecord> {
        self.records()
            .iter()
            .filter(|record| field_eq(&record.course, course))
            .collect()
    }

    /// Records whose status matches, trimmed and case-insensitive
    pub fn filter_by_status(&self, status: &str) -> Vec<&StudentRecord> {
        self.records()
            .iter()
            .filter(|record| field_eq(&record.status, status))
            .collect()
    }

    /// All records tied for the highest CWA
    ///
    /// First pass finds the maximum, second pass collects every record whose
    /// CWA equals it. Exact float equality is sound here because the maximum
    /// is one of the compared values itself. Empty store yields an empty vec.
    pub fn highest_cwa(&self) -> Vec<&StudentRecord> {
        let mut records = self.records().iter();
        let Some(first) = records.next() else {
            return Vec::new();
        };

        let mut max = first.cwa;
        for record in records {
            if record.cwa > max {
                max = record.cwa;
            }
        }

        self.records()
            .iter()
            .filter(|record| record.cwa == max)
            .collect()
    }

    /// Mean CWA per distinct course
    ///
    /// Courses are de-duplicated trimmed and case-insensitively; the
    /// first-seen spelling becomes the display label and output follows
    /// first-seen order. Every distinct course has at least one matching
    /// record, so the mean is always well-defined.
    pub fn average_cwa_by_course(&self) -> Vec<CourseAverage> {
        // Phase 1: distinct course labels in first-seen order
        let mut labels: Vec<&str> = Vec::new();
        for record in self.records() {
            let course = record.course.trim();
            if !labels.iter().any(|label| field_eq(label, course)) {
                labels.push(course);
            }
        }

        // Phase 2: mean over matching records per label
        labels
            .into_iter()
            .map(|label| {
                let mut total = 0.0;
                let mut students = 0usize;
                for record in self.records() {
                    if field_eq(&record.course, label) {
                        total += record.cwa;
                        students += 1;
                    }
                }
                CourseAverage {
                    course: label.to_string(),
                    average: total / students as f64,
                    students,
                }
            })
            .collect()
    }

    /// Records meeting the configured graduation credit threshold
    ///
    /// The boundary is inclusive: a record with exactly the threshold is
    /// eligible.
    pub fn graduation_eligible(&self) -> Vec<&StudentRecord> {
        let threshold = self.config().graduation_credits;
        self.records()
            .iter()
            .filter(|record| record.earned_credits >= threshold)
            .collect()
    }
}
