use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{sort_best_first, HighscoreRecord, HighscoreStore};
use crate::StoreError;

pub(super) const HEADER: &str = "Name,Highscores";

/// Highscores kept as comma-separated text, one `name,score` record per line.
///
/// A header line is written when the file is created. Blank lines are
/// ignored and malformed lines are skipped with a warning.
#[derive(Debug)]
pub struct CsvHighscoreStore {
    path: PathBuf,
    // Serializes appends against reads within this process.
    lock: Mutex<()>,
}

impl CsvHighscoreStore {
    /// Open the store at `path`, creating it with a header if missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::unavailable(format!("{}: {e}", parent.display()))
                })?;
            }
            fs::write(&path, format!("{HEADER}\n"))
                .map_err(|e| StoreError::unavailable(format!("{}: {e}", path.display())))?;
            tracing::info!(path = %path.display(), "created highscore file");
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, contents: &str) -> Vec<HighscoreRecord> {
        let mut records = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_record(line) {
                Some(record) => records.push(record),
                None if line == HEADER => {}
                None => tracing::warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    "skipping malformed highscore record"
                ),
            }
        }
        records
    }
}

/// Parse a single `name,score` line
pub(super) fn parse_record(line: &str) -> Option<HighscoreRecord> {
    let (name, score) = line.rsplit_once(',')?;
    let score = score.trim().parse::<u32>().ok()?;
    Some(HighscoreRecord::new(name.trim(), score))
}

impl HighscoreStore for CsvHighscoreStore {
    fn read_all(&self) -> Result<Vec<HighscoreRecord>, StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::unavailable("store lock poisoned"))?;

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::unavailable(format!("{}: {e}", self.path.display())))?;

        let mut records = self.parse(&contents);
        sort_best_first(&mut records);
        Ok(records)
    }

    fn append(&self, record: &HighscoreRecord) -> Result<(), StoreError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::write_failed("store lock poisoned"))?;

        let write_failed = |e: std::io::Error| {
            StoreError::write_failed(format!("{}: {e}", self.path.display()))
        };

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(write_failed)?;

        let mut line = String::new();
        let len = file.metadata().map_err(write_failed)?.len();
        if len == 0 {
            line.push_str(HEADER);
            line.push('\n');
        } else {
            let mut last = [0u8; 1];
            file.seek(SeekFrom::End(-1)).map_err(write_failed)?;
            file.read_exact(&mut last).map_err(write_failed)?;
            if last[0] != b'\n' {
                line.push('\n');
            }
        }
        line.push_str(&format!("{},{}\n", record.name, record.score));

        file.write_all(line.as_bytes()).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;

        tracing::debug!(name = %record.name, score = record.score, "highscore appended");
        Ok(())
    }
}
