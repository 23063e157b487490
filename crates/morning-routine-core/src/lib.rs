//! # Morning Routine Core Library
//!
//! Business logic for a single-user daily habit checklist. One item records
//! the wake-up time and derives how many minutes late it was relative to
//! 06:00. State is one JSON document that resets once per calendar day.
//!
//! The CLI and web binaries are thin adapters over this crate.
//!
//! ## Architecture
//!
//! - **Engine**: pure transforms over a [`ChecklistDocument`]
//!   (`reset_if_needed`, `complete_item`, `set_wake_time`)
//! - **Storage**: the [`ChecklistStore`] trait with a JSON file store and an
//!   in-memory store, plus TOML [`Config`]
//! - **Service**: [`ChecklistService`] runs load/reset/mutate/save cycles
//! - **Render**: text and HTML views

pub mod clock;
pub mod engine;
pub mod error;
pub mod model;
pub mod render;
pub mod service;
pub mod storage;
pub mod wake_time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{complete_item, reset_if_needed, set_wake_time};
pub use error::{ChecklistError, ConfigError, StorageError};
pub use model::{ChecklistDocument, ChecklistItem, ItemRole};
pub use service::ChecklistService;
pub use storage::{ChecklistStore, Config, JsonFileStore, MemoryStore};
pub use wake_time::{calculate_minutes_late, WakeTime, TARGET_WAKE_TIME};
