//! Wake-time parsing and lateness calculation.
//!
//! Times are plain `HH:MM` wall-clock values with no date or zone attached.
//! Lateness is measured against [`TARGET_WAKE_TIME`] and never goes negative:
//! waking early and waking on time both count as zero minutes late.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{ChecklistError, Result};

/// The fixed wake-up target, 06:00.
pub const TARGET_WAKE_TIME: WakeTime = match NaiveTime::from_hms_opt(6, 0, 0) {
    Some(time) => WakeTime(time),
    None => panic!("06:00 is a valid time of day"),
};

const FORMAT: &str = "%H:%M";

/// A validated 24-hour `HH:MM` time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    /// Build a wake time from components, rejecting out-of-range values.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Minutes past [`TARGET_WAKE_TIME`], clamped at zero.
    pub fn minutes_late(&self) -> u32 {
        let minutes = self.0.signed_duration_since(TARGET_WAKE_TIME.0).num_minutes();
        u32::try_from(minutes.max(0)).unwrap_or_default()
    }
}

impl FromStr for WakeTime {
    type Err = ChecklistError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveTime::parse_from_str(s.trim(), FORMAT)
            .map(Self)
            .map_err(|e| ChecklistError::invalid_format(s, format!("expected HH:MM ({e})")))
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl TryFrom<String> for WakeTime {
    type Error = ChecklistError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<WakeTime> for String {
    fn from(value: WakeTime) -> Self {
        value.to_string()
    }
}

/// Minutes late for an optional `HH:MM` string.
///
/// Absent or blank input counts as zero minutes late. Anything else must be a
/// valid wake time or the call fails with [`ChecklistError::InvalidFormat`].
pub fn calculate_minutes_late(wake_time: Option<&str>) -> Result<u32> {
    match wake_time {
        None => Ok(0),
        Some(s) if s.trim().is_empty() => Ok(0),
        Some(s) => Ok(s.parse::<WakeTime>()?.minutes_late()),
    }
}
