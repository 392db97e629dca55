//! Highscore persistence.
//!
//! The store is an append-only list of `(name, score)` records. Reads always
//! come back best first; records with equal scores keep insertion order.

mod csv;

pub use csv::CsvHighscoreStore;

use std::sync::Mutex;

use crate::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreRecord {
    pub name: String,
    pub score: u32,
}

impl HighscoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl From<HighscoreRecord> for proto::HighscoreRow {
    fn from(record: HighscoreRecord) -> Self {
        proto::HighscoreRow {
            name: record.name,
            score: record.score,
        }
    }
}

/// Backing store for named highscores.
///
/// Implementations must make `append` atomic relative to a concurrent
/// `read_all`.
pub trait HighscoreStore: Send + Sync {
    /// All records, best first
    fn read_all(&self) -> Result<Vec<HighscoreRecord>, StoreError>;

    fn append(&self, record: &HighscoreRecord) -> Result<(), StoreError>;
}

/// Order records by score, best first. Stable for equal scores.
pub fn sort_best_first(records: &mut [HighscoreRecord]) {
    records.sort_by(|a, b| b.score.cmp(&a.score));
}

/// In-process store, for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryHighscoreStore {
    records: Mutex<Vec<HighscoreRecord>>,
}

impl MemoryHighscoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<HighscoreRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl HighscoreStore for MemoryHighscoreStore {
    fn read_all(&self) -> Result<Vec<HighscoreRecord>, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?
            .clone();
        sort_best_first(&mut records);
        Ok(records)
    }

    fn append(&self, record: &HighscoreRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::write_failed("store lock poisoned"))?
            .push(record.clone());
        Ok(())
    }
}
