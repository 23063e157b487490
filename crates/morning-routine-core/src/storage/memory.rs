use std::sync::Mutex;

use super::ChecklistStore;
use crate::error::StorageError;
use crate::model::ChecklistDocument;

/// In-process store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<Option<ChecklistDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `doc`.
    pub fn with_document(doc: ChecklistDocument) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
        }
    }

    /// The last saved document, if any.
    pub fn snapshot(&self) -> Option<ChecklistDocument> {
        self.doc.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ChecklistStore for MemoryStore {
    fn load(&self) -> Result<ChecklistDocument, StorageError> {
        let guard = self.doc.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, doc: &ChecklistDocument) -> Result<(), StorageError> {
        let mut guard = self.doc.lock().map_err(|_| StorageError::Unavailable)?;
        *guard = Some(doc.clone());
        Ok(())
    }
}
