//! Core error types for morning-routine-core.
//!
//! Item lookups that miss are not errors: the engine reports them as
//! `false`/`None` so adapters can map them to their own "not found" output.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for checklist operations.
#[derive(Error, Debug)]
pub enum ChecklistError {
    /// Wake time string is not a valid `HH:MM` value
    #[error("Invalid wake time '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// Persistence failed; fatal to the current operation
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ChecklistError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        ChecklistError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or write the checklist file
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Checklist file exists but does not hold a valid document
    #[error("Checklist file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document could not be serialized
    #[error("Failed to encode checklist: {0}")]
    Encode(#[from] serde_json::Error),

    /// Data directory could not be determined or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),

    /// In-memory store lock was poisoned by a panicking writer
    #[error("Checklist store is unavailable")]
    Unavailable,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// Data directory could not be determined or created
    #[error(transparent)]
    DataDir(#[from] StorageError),
}

/// Result type alias for ChecklistError
pub type Result<T, E = ChecklistError> = std::result::Result<T, E>;
