//! JSON file store.
//!
//! The checklist lives in one pretty-printed JSON file. Saves go through a
//! sibling temp file that is synced and renamed over the target.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::ChecklistStore;
use crate::error::StorageError;
use crate::model::ChecklistDocument;

const CHECKLIST_FILE: &str = "checklist.json";

/// Checklist persisted as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    seed: Option<ChecklistDocument>,
}

impl JsonFileStore {
    /// Store at an explicit path. Loads an empty document when the file is
    /// missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed: None,
        }
    }

    /// Use `seed` instead of an empty document when the file is missing.
    pub fn with_seed(mut self, seed: ChecklistDocument) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ChecklistStore for JsonFileStore {
    fn load(&self) -> Result<ChecklistDocument, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no checklist file; using default");
                return Ok(self.seed.clone().unwrap_or_default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut doc: ChecklistDocument =
            serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        doc.normalize_roles();
        Ok(doc)
    }

    fn save(&self, doc: &ChecklistDocument) -> Result<(), StorageError> {
        let mut bytes = serde_json::to_vec_pretty(doc)?;
        bytes.push(b'\n');

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| self.io_error(e))?;

        let tmp = parent.join(format!(
            ".{}.tmp.{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(CHECKLIST_FILE),
            std::process::id()
        ));
        {
            let mut f = std::fs::File::create(&tmp).map_err(|e| self.io_error(e))?;
            f.write_all(&bytes).map_err(|e| self.io_error(e))?;
            f.sync_all().map_err(|e| self.io_error(e))?;
        }
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }

        tracing::debug!(path = %self.path.display(), items = doc.items.len(), "checklist saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("checklist.json"));

        let doc = store.load().unwrap();
        assert_eq!(doc, ChecklistDocument::default());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_missing_file_loads_seed() {
        let temp_dir = TempDir::new().unwrap();
        let seed = ChecklistDocument::seeded(["Wake up", "Stretch"]);
        let store = JsonFileStore::new(temp_dir.path().join("checklist.json")).with_seed(seed.clone());

        assert_eq!(store.load().unwrap(), seed);
    }

    #[test]
    fn test_save_then_load_is_lossless() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("checklist.json"));

        let mut doc = ChecklistDocument::seeded(["Wake up", "Stretch", "Journal"]);
        doc.last_reset = NaiveDate::from_ymd_opt(2026, 10, 19);
        crate::engine::set_wake_time(&mut doc, "06:20").unwrap();
        doc.items[2].last_completed = NaiveDate::from_ymd_opt(2026, 10, 17);

        store.save(&doc).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, doc);

        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested/dir");
        let store = JsonFileStore::new(nested.join("checklist.json"));

        store.save(&ChecklistDocument::seeded(["Wake up"])).unwrap();

        let names: Vec<_> = std::fs::read_dir(&nested)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["checklist.json".to_string()]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("checklist.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_legacy_file_is_normalized_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("checklist.json");
        std::fs::write(
            &path,
            r#"{"items":[{"id":1,"task":"Wake up","completed_today":false,
                "actual_wake_time":null,"minutes_late":null}],"last_reset":null}"#,
        )
        .unwrap();

        let doc = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(doc.wake_tracker().map(|i| i.id), Some(1));
    }

    #[test]
    fn test_legacy_file_with_unreadable_wake_time_still_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("checklist.json");
        std::fs::write(
            &path,
            r#"{"items":[{"id":1,"task":"Wake up","completed_today":true,
                "actual_wake_time":"7am","minutes_late":null},
                {"id":2,"task":"Water","completed_today":false,
                "actual_wake_time":null,"minutes_late":null}],"last_reset":"2026-10-18"}"#,
        )
        .unwrap();

        let doc = JsonFileStore::new(&path).load().unwrap();
        let tracker = doc.wake_tracker().unwrap();
        assert_eq!(tracker.id, 1);
        assert_eq!(tracker.actual_wake_time, None);
        assert!(tracker.completed_today);
        assert_eq!(doc.last_reset, NaiveDate::from_ymd_opt(2026, 10, 18));
    }
}
