//! JSON file holding every finished match, newest first.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use super::MatchRecord;
use crate::error::StoreError;

/// Match history backed by a JSON file.
#[derive(Debug, Clone)]
pub struct MatchHistory {
    path: PathBuf,
    records: Vec<MatchRecord>,
}

impl MatchHistory {
    /// Empty history that will be written to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }

    /// Load records from `path`.
    ///
    /// A missing file yields an empty history. A file that does not parse
    /// is logged and ignored; only I/O failures are returned.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let mut history = Self::new(path);

        if !path.exists() {
            debug!("no history file yet");
            return Ok(history);
        }

        let text = fs::read_to_string(path)?;
        match serde_json::from_str::<Vec<MatchRecord>>(&text) {
            Ok(records) => {
                info!(count = records.len(), "loaded match history");
                history.records = records;
            }
            Err(err) => warn!(error = %err, "failed to load matches, starting empty"),
        }
        Ok(history)
    }

    /// Write all records to the backing file.
    #[instrument(skip(self), fields(path = %self.path.display(), count = self.records.len()))]
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json)?;
        debug!("history saved");
        Ok(())
    }

    /// Prepend a record (newest first).
    pub fn add(&mut self, record: MatchRecord) {
        self.records.insert(0, record);
    }

    /// Prepend and persist.
    pub fn add_and_save(&mut self, record: MatchRecord) -> Result<(), StoreError> {
        self.add(record);
        self.save()
    }

    #[inline]
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&MatchRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Mark, Pos};
    use crate::game::Players;
    use chrono::{TimeZone, Utc};

    fn record(secs: i64, winner: &str) -> MatchRecord {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Mark::First).unwrap();
        let date = Utc.timestamp_opt(secs, 0).unwrap();
        MatchRecord::new(&Players::new("A", "B"), Some(winner.into()), date, &board)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = MatchHistory::load(dir.path().join("none.json")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_and_reload_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("matches.json");

        let mut history = MatchHistory::new(&path);
        history.add_and_save(record(100, "A")).unwrap();
        history.add_and_save(record(200, "B")).unwrap();

        let loaded = MatchHistory::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.records()[0].winner.as_deref(), Some("B"));
        assert_eq!(loaded.records(), history.records());
        assert!(loaded.get("100000").is_some());
        assert!(loaded.get("1").is_none());
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");
        fs::write(&path, "{ not json").unwrap();

        let history = MatchHistory::load(&path).unwrap();
        assert!(history.is_empty());
        assert_eq!(history.path(), path.as_path());
    }
}
