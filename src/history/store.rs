//! JSON-backed history store.

use std::path::{Path, PathBuf};

use crate::error::HistoryError;

use super::{normalize, promote};

/// File name of the history list inside the config directory.
pub const HISTORY_FILE: &str = "history.json";

/// Most-recently-used emoticons persisted to a JSON array on disk.
///
/// Loading never fails: a missing or unreadable file yields an empty list.
/// Saving failures are logged and leave the in-memory list untouched.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    max: usize,
    entries: Vec<String>,
}

impl HistoryStore {
    /// Open the store at `dir/history.json` and load its contents.
    ///
    /// The directory is created if needed.
    pub fn open(dir: &Path, max: usize) -> Self {
        if let Err(e) = ensure_dir(dir) {
            tracing::warn!(%e, "History directory unavailable");
        }

        let path = dir.join(HISTORY_FILE);
        let entries = normalize(load(&path), max);
        tracing::debug!(count = entries.len(), "Loaded history");

        Self {
            path: Some(path),
            max,
            entries,
        }
    }

    /// Open the store in the default config directory.
    pub fn open_default(max: usize) -> Self {
        match crate::config::config_dir() {
            Ok(dir) => Self::open(&dir, max),
            Err(e) => {
                tracing::warn!(%e, "No config directory, history will not be saved");
                Self::in_memory(max)
            }
        }
    }

    /// A store that never touches the disk.
    pub fn in_memory(max: usize) -> Self {
        Self {
            path: None,
            max,
            entries: Vec::new(),
        }
    }

    /// Path of the backing file, if the store is persisted.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether the history has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a use of `emoticon` and persist the list.
    pub fn record(&mut self, emoticon: &str) {
        if emoticon.is_empty() {
            return;
        }

        promote(&mut self.entries, emoticon, self.max);

        if let Err(e) = self.save() {
            tracing::warn!(%e, path = ?self.path, "Failed to save history");
        }
    }

    /// Write the full list to disk.
    pub fn save(&self) -> Result<(), HistoryError> {
        match &self.path {
            Some(path) => save(path, &self.entries),
            None => Ok(()),
        }
    }
}

fn ensure_dir(dir: &Path) -> Result<(), HistoryError> {
    std::fs::create_dir_all(dir).map_err(HistoryError::CreateDirFailed)
}

/// Read a history list, returning an empty list on any failure.
pub fn load(path: &Path) -> Vec<String> {
    match try_load(path) {
        Ok(entries) => entries,
        Err(HistoryError::ReadFailed(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("History file not found at {:?}", path);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(%e, "Ignoring history at {:?}", path);
            Vec::new()
        }
    }
}

fn try_load(path: &Path) -> Result<Vec<String>, HistoryError> {
    let content = std::fs::read_to_string(path).map_err(HistoryError::ReadFailed)?;
    serde_json::from_str(&content).map_err(HistoryError::ParseFailed)
}

/// Write a history list as a JSON array.
pub fn save(path: &Path, entries: &[String]) -> Result<(), HistoryError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }

    let json = serde_json::to_string(entries).map_err(HistoryError::SerializeFailed)?;
    std::fs::write(path, json).map_err(HistoryError::WriteFailed)?;
    tracing::debug!("Saved history to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DEFAULT_MAX_HISTORY;
    use crate::test_utils::{history_list, temp_history};

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join(HISTORY_FILE)).is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        std::fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_load_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        std::fs::write(&path, r#"{"history": ["😀"]}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        let entries = history_list(&["😀", "😊", "❤️", "<3", r"¯\_(ツ)_/¯"]);

        save(&path, &entries).unwrap();
        assert_eq!(load(&path), entries);
    }

    #[test]
    fn test_save_writes_unescaped_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HISTORY_FILE);
        save(&path, &history_list(&["😀"])).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"["😀"]"#);
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join(".config").join("smile");

        let store = HistoryStore::open(&nested, DEFAULT_MAX_HISTORY);
        assert!(nested.is_dir());
        assert!(store.is_empty());

        // Opening again is fine
        HistoryStore::open(&nested, DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn test_record_persists() {
        let (dir, mut store) = temp_history();
        store.record("A");
        store.record("B");
        store.record("A");
        assert_eq!(store.entries(), history_list(&["A", "B"]).as_slice());

        let reopened = HistoryStore::open(dir.path(), DEFAULT_MAX_HISTORY);
        assert_eq!(reopened.entries(), store.entries());
    }

    #[test]
    fn test_record_eleventh_drops_oldest() {
        let (_dir, mut store) = temp_history();
        for i in 0..11 {
            store.record(&format!("e{}", i));
        }
        assert_eq!(store.entries().len(), 10);
        assert_eq!(store.entries()[0], "e10");
        assert!(!store.entries().contains(&"e0".to_string()));
    }

    #[test]
    fn test_record_ignores_empty() {
        let (_dir, mut store) = temp_history();
        store.record("");
        assert!(store.is_empty());
        assert!(!store.path().unwrap().exists());
    }

    #[test]
    fn test_open_normalizes_hand_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let raw: Vec<String> = (0..15).map(|i| format!("e{}", i % 12)).collect();
        save(&dir.path().join(HISTORY_FILE), &raw).unwrap();

        let store = HistoryStore::open(dir.path(), DEFAULT_MAX_HISTORY);
        assert_eq!(store.entries().len(), 10);
        assert_eq!(store.entries()[0], "e0");
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = HistoryStore::open(dir.path(), DEFAULT_MAX_HISTORY);
        // A directory where the file should be makes every write fail
        std::fs::create_dir(store.path().unwrap()).unwrap();

        store.record("A");
        assert_eq!(store.entries(), history_list(&["A"]).as_slice());
        assert!(store.save().is_err());
    }
}
