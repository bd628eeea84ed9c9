//! Configuration for RosterDB
//!
//! Centralized configuration with sensible defaults (`data.csv`, 100
//! records, 400 graduation credits). A `Config::default()` store behaves
//! exactly like a flagless run of the binary.

use std::path::PathBuf;

/// Main configuration for a roster store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the backing data file (one record per line, 8 comma-separated
    /// fields). Created on first write if it does not exist.
    pub data_path: PathBuf,

    /// Soft upper bound on the number of live records. `add` refuses past
    /// this limit and loading stops early when it is reached.
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Query Configuration
    // -------------------------------------------------------------------------
    /// Earned-credit threshold for graduation eligibility (inclusive).
    pub graduation_credits: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            capacity: 100,
            graduation_credits: 400,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing data file path
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_path = path.into();
        self
    }

    /// Set the roster capacity (soft limit on live records)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the graduation credit threshold (inclusive)
    pub fn graduation_credits(mut self, credits: u32) -> Self {
        self.config.graduation_credits = credits;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
