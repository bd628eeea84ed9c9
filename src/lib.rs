//! # RosterDB
//!
//! A small, single-process student roster manager with:
//! - A flat, line-oriented text file as the only persistence format
//! - An in-memory record store with filter and aggregate queries
//! - An interactive numbered-menu loop over stdin/stdout
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Menu Loop                             │
//! │             (numbered options, field prompts)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RosterStore                             │
//! │        (ordered Vec of records, soft capacity limit)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Line Codec  │          │   Queries   │
//!   │ (8 fields)  │          │ (scans/agg) │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  data file  │
//!   │ (one/line)  │
//!   └─────────────┘
//! ```
//!
//! The whole program is single-threaded: every operation, including file
//! I/O, runs to completion before the next menu prompt is shown.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use record::{RecordPatch, StudentRecord};
pub use store::RosterStore;
pub use menu::Menu;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RosterDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
