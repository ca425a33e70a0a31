//! Disk snapshot of the reference dataset at ~/.leadatlas/dataset.json.
//!
//! TTL: 30 days. A fresh snapshot skips the network fetch entirely; a
//! stale one is still usable as a fallback when the fetch fails. All
//! disk I/O is best-effort — snapshot errors never propagate.

use super::types::CountryRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SNAPSHOT_TTL_MS: i64 = 30 * 24 * 3600 * 1000; // 30 days in ms

#[derive(Serialize, Deserialize)]
struct SnapshotFile {
    fetched_at: i64,
    records: Vec<CountryRecord>,
}

/// Dataset snapshot store bound to one file path.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store at the default location (~/.leadatlas/dataset.json).
    pub fn open() -> Self {
        Self { path: Self::default_path() }
    }

    /// Store at a specific path (for testing).
    pub fn open_at(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".leadatlas")
            .join("dataset.json")
    }

    fn read_file(&self) -> Option<SnapshotFile> {
        let data = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&data).ok()
    }

    /// Load the snapshot if present and within TTL.
    pub fn load_fresh(&self) -> Option<Vec<CountryRecord>> {
        let file = self.read_file()?;
        let now = chrono::Utc::now().timestamp_millis();
        if now - file.fetched_at > SNAPSHOT_TTL_MS {
            return None; // expired
        }
        Some(file.records)
    }

    /// Load the snapshot regardless of age (fallback after a failed fetch).
    pub fn load_any(&self) -> Option<Vec<CountryRecord>> {
        self.read_file().map(|f| f.records)
    }

    /// Persist a freshly fetched dataset. Failures are silently dropped.
    pub fn store(&self, records: &[CountryRecord]) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let file = SnapshotFile {
            fetched_at: chrono::Utc::now().timestamp_millis(),
            records: records.to_vec(),
        };
        if let Ok(json) = serde_json::to_string(&file) {
            let _ = fs::write(&self.path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(name: &str, cities: &[&str]) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn test_store() -> (SnapshotStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.json");
        (SnapshotStore::open_at(path), dir)
    }

    #[test]
    fn test_store_and_load() {
        let (store, _dir) = test_store();
        store.store(&[record("Turkey", &["İzmir"])]);

        let records = store.load_fresh().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Turkey");
    }

    #[test]
    fn test_missing_file() {
        let (store, _dir) = test_store();
        assert!(store.load_fresh().is_none());
        assert!(store.load_any().is_none());
    }

    #[test]
    fn test_expired_snapshot_not_fresh_but_loadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.json");
        let stale = SnapshotFile {
            fetched_at: 0, // far past
            records: vec![record("Norway", &["Oslo"])],
        };
        fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let store = SnapshotStore::open_at(path);
        assert!(store.load_fresh().is_none());
        let records = store.load_any().unwrap();
        assert_eq!(records[0].name, "Norway");
    }

    #[test]
    fn test_corrupt_file_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dataset.json");
        fs::write(&path, "not json").unwrap();

        let store = SnapshotStore::open_at(path);
        assert!(store.load_fresh().is_none());
        assert!(store.load_any().is_none());
    }

    #[test]
    fn test_store_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dataset.json");
        let store = SnapshotStore::open_at(path);
        store.store(&[record("Italy", &["Padua"])]);
        assert!(store.load_fresh().is_some());
    }
}
