//! Store Module
//!
//! The Record Store: an ordered, bounded, file-backed collection of student
//! records.
//!
//! ## Responsibilities
//! - Exclusive ownership of the in-memory record list and the backing file
//! - Load on open, append on add, full atomic rewrite on edit
//! - Lookup, filter, and aggregate queries in insertion order
//!
//! ## Consistency Model
//! Single actor, no locking: every operation runs to completion on the one
//! control thread before the next begins. The only durability discipline is
//! the atomic temp-file rename in `save_all`; a crash between an in-memory
//! mutation and the rewrite completing loses that update.

mod roster;
mod query;

pub use roster::RosterStore;
pub use query::CourseAverage;
