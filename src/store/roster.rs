//! Roster store
//!
//! Owns the record list and the backing-file lifecycle.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::record::{codec, RecordPatch, StudentRecord};

/// The file-backed record store
///
/// ## Persistence Model
///
/// - **add**: appends one line to the backing file
/// - **update**: rewrites the whole file from the in-memory list
/// - **load**: populates memory from the file on open, never mutates it
///
/// The in-memory list is authoritative between rewrites. If a file append
/// fails after a record was admitted in memory, the record stays and the
/// error is surfaced; memory and file then diverge until the next rewrite.
pub struct RosterStore {
    /// Store configuration
    config: Config,

    /// Live records in insertion order
    records: Vec<StudentRecord>,
}

impl RosterStore {
    /// Suffix for the rewrite scratch file
    const TMP_SUFFIX: &'static str = ".tmp";

    /// Create an empty store with the given config (no file I/O)
    pub fn new(config: Config) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    /// Open a store, loading the backing file if it exists
    ///
    /// On startup:
    /// 1. Start from an empty list
    /// 2. If the data file exists, parse it line by line
    /// 3. Skip lines with the wrong field count, stop at capacity
    ///
    /// A missing file is not an error; the store starts empty. An
    /// unparseable numeric field aborts the whole load.
    pub fn open(config: Config) -> Result<Self> {
        let mut store = Self::new(config);
        if store.config.data_path.exists() {
            store.load()?;
        } else {
            tracing::debug!(path = %store.config.data_path.display(), "no data file, starting empty");
        }
        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_path(path).build();
        Self::open(config)
    }

    /// Populate the in-memory list from the backing file
    fn load(&mut self) -> Result<()> {
        let file = File::open(&self.config.data_path)?;
        let reader = BufReader::new(file);

        let mut skipped = 0usize;
        for (line_no, line) in reader.lines().enumerate() {
            if self.records.len() >= self.config.capacity {
                tracing::warn!(
                    capacity = self.config.capacity,
                    "capacity reached, remaining lines ignored"
                );
                break;
            }

            let line = line?;
            match codec::decode_line(&line)? {
                Some(record) => self.records.push(record),
                None => {
                    // Wrong field count: skip silently, surface nothing
                    tracing::debug!(line = line_no + 1, "skipping malformed line");
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            records = self.records.len(),
            skipped,
            path = %self.config.data_path.display(),
            "roster loaded"
        );
        Ok(())
    }

    /// Add a record
    ///
    /// Steps:
    /// 1. Refuse if the roster is at capacity
    /// 2. Append to the in-memory list
    /// 3. Append one line to the backing file
    ///
    /// If the file append fails, the in-memory record is kept and the error
    /// is returned; the next full rewrite reconciles the file.
    pub fn add(&mut self, record: StudentRecord) -> Result<()> {
        if self.records.len() >= self.config.capacity {
            return Err(RosterError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        let line = codec::encode_line(&record);
        tracing::debug!(id = %record.id, "record added");
        self.records.push(record);

        self.append_line(&line)
    }

    /// Find the first record with the given id
    ///
    /// Ids are informally unique; a duplicate id is only ever reached by
    /// its first occurrence.
    pub fn find_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Apply a patch to the record with the given id, then rewrite the file
    ///
    /// Fields absent from the patch are left unchanged. Returns
    /// `RosterError::NotFound` when no record matches.
    pub fn update(&mut self, id: &str, patch: RecordPatch) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        patch.apply(record);
        tracing::debug!(id, "record updated");

        self.save_all()
    }

    /// Rewrite the backing file from the in-memory list
    ///
    /// Writes every record in insertion order to a scratch file, then
    /// renames it over the data file so a crash mid-write never leaves a
    /// torn file behind.
    pub fn save_all(&self) -> Result<()> {
        let tmp_path = self.tmp_path();

        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            for record in &self.records {
                writeln!(writer, "{}", codec::encode_line(record))?;
            }
            writer.flush()?;
        }

        fs::rename(&tmp_path, &self.config.data_path)?;
        tracing::debug!(records = self.records.len(), "roster saved");
        Ok(())
    }

    /// Iterate all records in insertion order
    ///
    /// Restartable: each call re-traverses the same list from the start.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when the roster is at capacity
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.config.capacity
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the backing file path
    pub fn data_path(&self) -> &Path {
        &self.config.data_path
    }

    /// All records as a slice, insertion order
    pub(crate) fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Append one encoded line to the backing file
    fn append_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.config.data_path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// Scratch-file path for the atomic rewrite
    fn tmp_path(&self) -> PathBuf {
        let mut path = self.config.data_path.as_os_str().to_os_string();
        path.push(Self::TMP_SUFFIX);
        PathBuf::from(path)
    }
}
