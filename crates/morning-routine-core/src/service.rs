//! Read-modify-write cycles over a [`ChecklistStore`].
//!
//! Every call loads a fresh document, applies the daily reset, runs one engine
//! operation and saves. Nothing is cached between calls. The service does no
//! locking of its own; adapters that accept concurrent requests must serialize
//! calls (the web server holds it behind a single mutex).

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::engine;
use crate::error::Result;
use crate::model::ChecklistDocument;
use crate::storage::ChecklistStore;

#[derive(Clone)]
pub struct ChecklistService {
    store: Arc<dyn ChecklistStore>,
    clock: Arc<dyn Clock>,
}

impl ChecklistService {
    /// Service on the system clock.
    pub fn new(store: impl ChecklistStore + 'static) -> Self {
        Self::with_clock(store, SystemClock)
    }

    pub fn with_clock(store: impl ChecklistStore + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            store: Arc::new(store),
            clock: Arc::new(clock),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Current document with the daily reset applied.
    ///
    /// A reset that changed anything is saved right away so the derived
    /// `last_completed` dates are not recomputed on a later read.
    pub fn current(&self) -> Result<ChecklistDocument> {
        let mut doc = self.store.load()?;
        if engine::reset_if_needed(&mut doc, self.clock.today()) {
            self.store.save(&doc)?;
        }
        Ok(doc)
    }

    /// Mark an item completed. Returns `false` if the id is unknown.
    pub fn complete(&self, item_id: u32) -> Result<bool> {
        let mut doc = self.current()?;
        if !engine::complete_item(&mut doc, item_id) {
            tracing::debug!(item_id, "complete: item not found");
            return Ok(false);
        }
        self.store.save(&doc)?;
        tracing::info!(item_id, "item completed");
        Ok(true)
    }

    /// Record today's wake time and return the resulting minutes late.
    ///
    /// Returns `None` when the checklist has no wake-time tracker. Invalid
    /// input fails with [`crate::ChecklistError::InvalidFormat`] and saves
    /// nothing.
    pub fn record_wake_time(&self, wake_time: &str) -> Result<Option<u32>> {
        let mut doc = self.current()?;
        if !engine::set_wake_time(&mut doc, wake_time)? {
            tracing::debug!("wake time: checklist has no tracker item");
            return Ok(None);
        }
        self.store.save(&doc)?;

        let minutes_late = doc.wake_tracker().and_then(|item| item.minutes_late);
        tracing::info!(wake_time, ?minutes_late, "wake time recorded");
        Ok(minutes_late)
    }
}
