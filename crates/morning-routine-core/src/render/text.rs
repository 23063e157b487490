use chrono::NaiveDate;

use super::{lateness_label, long_date, progress};
use crate::model::ChecklistDocument;

/// Terminal view: one line per item plus a progress footer.
pub fn text(doc: &ChecklistDocument, today: NaiveDate) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(String::new());
    lines.push("🌅 Morning Routine Checklist".to_string());
    lines.push(format!("📅 {}", long_date(today)));
    lines.push(String::new());

    for item in &doc.items {
        let status = if item.completed_today { "✅" } else { "⬜" };
        lines.push(format!("{status} {}. {}", item.id, item.task));

        if item.is_wake_time_tracker() && item.actual_wake_time.is_some() {
            let minutes = item.minutes_late.unwrap_or(0);
            let icon = if minutes == 0 { "✅" } else { "⏰" };
            lines.push(format!("   {icon} {}", lateness_label(minutes)));
        }
    }

    let p = progress(doc);
    lines.push(String::new());
    lines.push(format!("📊 Progress: {}/{} completed", p.completed, p.total));
    lines.push(String::new());

    lines.join("\n")
}
