//! Checklist commands: list, complete, waketime and the HTML view.

use std::path::PathBuf;

use morning_routine_core::render::{self, HtmlMode};
use morning_routine_core::{ChecklistService, Config, WakeTime};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Resolved configuration plus the service every checklist command runs on.
pub struct Context {
    service: ChecklistService,
    view_path: PathBuf,
}

impl Context {
    /// Load config and open the checklist store, honoring `--data-file`.
    pub fn load(data_file: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Config::load()?;
        if data_file.is_some() {
            config.data_file = data_file;
        }
        let store = config.open_store()?;
        tracing::debug!(path = %store.path().display(), "using checklist file");
        Ok(Self {
            service: ChecklistService::new(store),
            view_path: config.view_path()?,
        })
    }

    pub fn list(&self, json: bool) -> CommandResult {
        let doc = self.service.current()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            println!("{}", render::text(&doc, self.service.today()));
        }
        Ok(())
    }

    pub fn complete(&self, id: u32) -> CommandResult {
        if self.service.complete(id)? {
            self.write_view()?;
            println!("✅ Item {id} marked as complete!");
        } else {
            println!("❌ Item {id} not found");
        }
        Ok(())
    }

    pub fn wake_time(&self, raw: &str) -> CommandResult {
        let wake_time: WakeTime = match raw.parse() {
            Ok(t) => t,
            Err(e) => {
                println!("❌ Could not set wake time: {e}");
                return Ok(());
            }
        };

        match self.service.record_wake_time(&wake_time.to_string())? {
            Some(minutes_late) => {
                self.write_view()?;
                println!("⏰ Wake time set to {wake_time}");
                println!("   {}", render::lateness_label(minutes_late));
            }
            None => println!("❌ Could not set wake time: checklist has no wake-time item"),
        }
        Ok(())
    }

    pub fn generate(&self) -> CommandResult {
        self.write_view()?;
        println!("✅ HTML generated: {}", self.view_path.display());
        Ok(())
    }

    /// Write the view and hand it to the system opener.
    pub fn open_view(&self) -> CommandResult {
        self.write_view()?;
        if let Err(e) = open::that(&self.view_path) {
            tracing::warn!(error = %e, path = %self.view_path.display(), "could not open checklist view");
        }
        println!("🌅 Your daily checklist is ready: {}", self.view_path.display());
        Ok(())
    }

    fn write_view(&self) -> CommandResult {
        let doc = self.service.current()?;
        let page = render::html(&doc, self.service.today(), HtmlMode::Static);
        if let Some(parent) = self.view_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.view_path, page)?;
        tracing::debug!(path = %self.view_path.display(), "checklist view written");
        Ok(())
    }
}
