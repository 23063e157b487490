//! Self-contained HTML page for the checklist.

use chrono::NaiveDate;
use indoc::indoc;
use maud::{html as markup, Markup, PreEscaped, DOCTYPE};

use super::{lateness_label, long_date, progress};
use crate::model::{ChecklistDocument, ChecklistItem};
use crate::wake_time::TARGET_WAKE_TIME;

/// How the page talks back, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlMode {
    /// Served by the web adapter; checkboxes and the wake-time form call the
    /// JSON API.
    Live,
    /// Written to disk by the CLI; controls are read-only.
    Static,
}

const STYLE: &str = indoc! {r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        min-height: 100vh; padding: 20px;
        display: flex; justify-content: center; align-items: center;
    }
    .container {
        background: white; border-radius: 20px; padding: 40px;
        max-width: 600px; width: 100%;
        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
    }
    h1 { color: #2c3e50; margin-bottom: 10px; font-size: 32px; }
    .date { color: #7f8c8d; margin-bottom: 30px; font-size: 16px; }
    .progress-bar {
        background: #ecf0f1; height: 30px; border-radius: 15px;
        overflow: hidden; margin-bottom: 30px; position: relative;
    }
    #progress-fill {
        background: linear-gradient(90deg, #667eea 0%, #764ba2 100%);
        height: 100%; transition: width 0.3s ease;
    }
    #progress-text {
        position: absolute; top: 0; width: 100%; text-align: center;
        line-height: 30px; font-weight: bold; color: #2c3e50;
    }
    .checklist-item {
        background: #f8f9fa; padding: 20px; margin-bottom: 15px; border-radius: 12px;
        display: flex; flex-wrap: wrap; align-items: flex-start;
        border: 2px solid transparent;
    }
    .checklist-item.completed { background: #d4edda; border-color: #28a745; }
    .checklist-item input[type="checkbox"] { width: 22px; height: 22px; margin-right: 15px; }
    .task-text { flex: 1; color: #2c3e50; font-size: 16px; line-height: 1.5; }
    .completed .task-text { color: #28a745; }
    .wake-time-input {
        width: 100%; margin-top: 10px; background: white; padding: 15px;
        border-radius: 8px; border: 2px solid #667eea;
    }
    .wake-time-input label { display: block; margin-bottom: 8px; color: #2c3e50; }
    .wake-time-input input[type="time"] {
        padding: 8px 12px; border: 2px solid #ddd; border-radius: 6px; font-size: 16px;
    }
    .wake-time-input button {
        background: #667eea; color: white; border: none; padding: 8px 20px;
        border-radius: 6px; cursor: pointer; font-size: 16px;
    }
    #late-result {
        width: 100%; margin-top: 10px; padding: 12px; border-radius: 8px;
        font-weight: bold; color: #721c24; background: #f8d7da; border: 2px solid #f5c6cb;
    }
    .footer-note { text-align: center; margin-top: 30px; color: #7f8c8d; font-size: 14px; }
"#};

const LIVE_SCRIPT: &str = indoc! {r#"
    document.querySelectorAll('.task-checkbox').forEach(cb => {
      cb.addEventListener('change', () => {
        if (!cb.checked) { cb.checked = true; return; }
        fetch('/api/complete', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ id: Number(cb.dataset.id) })
        }).then(() => window.location.reload()).catch(console.error);
      });
    });
    const wakeFill = document.getElementById('wake-fill-target');
    if (wakeFill) {
      wakeFill.addEventListener('click', () => {
        document.getElementById('wake-time').value = wakeFill.dataset.target;
      });
    }
    const wakeSubmit = document.getElementById('wake-submit');
    if (wakeSubmit) {
      wakeSubmit.addEventListener('click', () => {
        const wakeTime = document.getElementById('wake-time').value;
        if (!wakeTime) { alert('Please enter a wake time'); return; }
        fetch('/api/waketime', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ wake_time: wakeTime })
        }).then(r => r.json()).then(res => {
          if (res.ok) { window.location.reload(); } else { alert(res.error || 'Could not set wake time'); }
        }).catch(console.error);
      });
    }
"#};

/// Render the full page.
pub fn html(doc: &ChecklistDocument, today: NaiveDate, mode: HtmlMode) -> String {
    page(doc, today, mode).into_string()
}

fn page(doc: &ChecklistDocument, today: NaiveDate, mode: HtmlMode) -> Markup {
    let p = progress(doc);
    let note = match mode {
        HtmlMode::Live => "Changes are saved as you go",
        HtmlMode::Static => "Use the morning-routine CLI to update, then refresh",
    };

    markup! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Morning Routine Checklist" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div.container {
                    h1 { "🌅 Morning Routine" }
                    div.date { (long_date(today)) }
                    div.progress-bar {
                        div id="progress-fill" style={ "width: " (p.percent) "%" } {}
                        div id="progress-text" { (p.completed) " of " (p.total) " completed" }
                    }
                    div.checklist {
                        @for item in &doc.items {
                            (render_item(item, mode))
                        }
                    }
                    div.footer-note { (note) }
                }
                @if mode == HtmlMode::Live {
                    script { (PreEscaped(LIVE_SCRIPT)) }
                }
            }
        }
    }
}

fn render_item(item: &ChecklistItem, mode: HtmlMode) -> Markup {
    let disabled = mode == HtmlMode::Static || item.completed_today;

    markup! {
        div.checklist-item.completed[item.completed_today] data-id=(item.id) {
            input.task-checkbox type="checkbox" data-id=(item.id)
                checked[item.completed_today] disabled[disabled];
            span.task-text { (item.task) }
            @if item.is_wake_time_tracker() {
                (render_wake_section(item, mode))
            }
        }
    }
}

fn render_wake_section(item: &ChecklistItem, mode: HtmlMode) -> Markup {
    let value = item
        .actual_wake_time
        .map(|t| t.to_string())
        .unwrap_or_default();
    let live = mode == HtmlMode::Live;

    markup! {
        div.wake-time-input {
            label for="wake-time" { "At what time did you wake up?" }
            input type="time" id="wake-time" value=(value) disabled[!live];
            @if live {
                button type="button" id="wake-fill-target" data-target=(TARGET_WAKE_TIME.to_string()) {
                    "Use " (TARGET_WAKE_TIME.to_string())
                }
                button type="button" id="wake-submit" { "Submit" }
            }
        }
        @if let Some(minutes) = item.minutes_late.filter(|m| *m > 0) {
            div id="late-result" { "⏰ " (lateness_label(minutes)) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_page_has_wake_input_and_progress() {
        let mut doc = ChecklistDocument::seeded(["Wake up", "Drink water"]);
        engine::complete_item(&mut doc, 2);

        let page = html(&doc, today(), HtmlMode::Live);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("id=\"wake-time\""));
        assert!(page.contains("1 of 2 completed"));
        assert!(page.contains("width: 50%"));
        assert!(page.contains("/api/waketime"));
    }

    #[test]
    fn test_static_page_has_no_script() {
        let doc = ChecklistDocument::seeded(["Wake up"]);
        let page = html(&doc, today(), HtmlMode::Static);
        assert!(!page.contains("<script>"));
        assert!(!page.contains("wake-submit"));
        assert!(!page.contains("wake-fill-target"));
        assert!(page.contains(" disabled"));
    }

    #[test]
    fn test_live_page_offers_target_fill_button() {
        let doc = ChecklistDocument::seeded(["Wake up", "Water"]);
        let page = html(&doc, today(), HtmlMode::Live);
        assert!(page.contains("id=\"wake-fill-target\""));
        assert!(page.contains("data-target=\"06:00\""));
        assert!(page.contains("wakeFill.dataset.target"));
        assert_eq!(page.matches("id=\"wake-time\"").count(), 1);
    }

    #[test]
    fn test_completed_items_are_checked() {
        let mut doc = ChecklistDocument::seeded(["Wake up", "Water"]);
        engine::complete_item(&mut doc, 2);
        let page = html(&doc, today(), HtmlMode::Live);
        assert!(page.contains("class=\"checklist-item completed\""));
        assert_eq!(page.matches("checked disabled").count(), 1);
    }

    #[test]
    fn test_late_banner_only_when_late() {
        let mut doc = ChecklistDocument::seeded(["Wake up"]);
        engine::set_wake_time(&mut doc, "06:00").unwrap();
        let page = html(&doc, today(), HtmlMode::Live);
        assert!(!page.contains("<div id=\"late-result\">"));
        assert!(!page.contains("⏰"));

        engine::set_wake_time(&mut doc, "06:45").unwrap();
        let page = html(&doc, today(), HtmlMode::Live);
        assert!(page.contains("<div id=\"late-result\">⏰ 45 minutes late</div>"));
        assert!(page.contains("value=\"06:45\""));
    }

    #[test]
    fn test_task_text_is_escaped() {
        let doc = ChecklistDocument::seeded(["Wake up", "<b>Read</b> & \"write\""]);
        let page = html(&doc, today(), HtmlMode::Static);
        assert!(page.contains("&lt;b&gt;Read&lt;/b&gt; &amp; &quot;write&quot;"));
        assert!(!page.contains("<b>Read</b>"));
    }
}
