//! snag: a terminal reading aid.
//!
//! Text is split into clickable word tokens. Words that break your focus get
//! marked, removed from the page, and collected into a ranked summary with the
//! words around them.

pub mod app;
pub mod config_paths;
pub mod engine;
pub mod input;
pub mod logging;
pub mod notes;
pub mod reading;
pub mod report;
pub mod ui;
