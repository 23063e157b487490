//! Views of the checklist for terminals and browsers.

mod html;
mod text;

pub use html::{html, HtmlMode};
pub use text::text;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::ChecklistDocument;

/// Completion progress for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent; 0 for an empty checklist.
    pub percent: u32,
}

pub fn progress(doc: &ChecklistDocument) -> Progress {
    let completed = doc.completed_count();
    let total = doc.items.len();
    let percent = if total == 0 {
        0
    } else {
        ((completed * 100 + total / 2) / total) as u32
    };
    Progress {
        completed,
        total,
        percent,
    }
}

/// Human-readable lateness, e.g. `"45 minutes late"` or `"1 hour 5 min late"`.
pub fn lateness_label(minutes_late: u32) -> String {
    match minutes_late {
        0 => "On time!".to_string(),
        1 => "1 minute late".to_string(),
        m if m < 60 => format!("{m} minutes late"),
        m => {
            let hours = m / 60;
            let mins = m % 60;
            let plural = if hours > 1 { "s" } else { "" };
            if mins > 0 {
                format!("{hours} hour{plural} {mins} min late")
            } else {
                format!("{hours} hour{plural} late")
            }
        }
    }
}

/// Long date used in view headers, e.g. `Monday, October 19, 2026`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}
