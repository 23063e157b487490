mod config;
mod json_file;
mod memory;

pub use config::Config;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::StorageError;
use crate::model::ChecklistDocument;

/// Whole-document persistence for the checklist.
///
/// There is no partial-update API: callers load, transform and save the
/// entire document.
pub trait ChecklistStore: Send + Sync {
    /// Load the stored document, or the store's default when nothing has
    /// been saved yet. Missing storage is not an error.
    fn load(&self) -> Result<ChecklistDocument, StorageError>;

    /// Replace the stored document.
    fn save(&self, doc: &ChecklistDocument) -> Result<(), StorageError>;
}

impl<T: ChecklistStore + ?Sized> ChecklistStore for Arc<T> {
    fn load(&self) -> Result<ChecklistDocument, StorageError> {
        (**self).load()
    }

    fn save(&self, doc: &ChecklistDocument) -> Result<(), StorageError> {
        (**self).save(doc)
    }
}

/// Returns `~/.config/morning-routine[-dev]/` based on MORNING_ROUTINE_ENV.
///
/// Set MORNING_ROUTINE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MORNING_ROUTINE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("morning-routine-dev")
    } else {
        base_dir.join("morning-routine")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
