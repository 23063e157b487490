pub mod checklist;
pub mod config;
