//! Ranking and export of removed blocks.
//!
//! History entries are grouped by their literal marked text, counted, and
//! sorted most frequent first. The result feeds the on-screen summary, the
//! CSV export and the clipboard copy.

pub mod csv;
pub mod text;

use std::collections::HashMap;
use std::io;

use thiserror::Error;

use crate::reading::HistoryEntry;

pub use self::csv::{to_csv, write_csv, CSV_HEADER};
pub use self::text::{format_line, to_clipboard_text};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing removed yet")]
    NothingToExport,

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub marked_text: String,
    pub count: usize,
    /// Context of the first entry seen for this text.
    pub sample_before: Option<String>,
    pub sample_after: Option<String>,
}

/// Groups entries by exact marked text and ranks them by count.
///
/// Ties keep the order in which each text first appeared.
pub fn aggregate(history: &[HistoryEntry]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in history {
        match index.get(entry.marked_text.as_str()) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(&entry.marked_text, groups.len());
                groups.push(Group {
                    marked_text: entry.marked_text.clone(),
                    count: 1,
                    sample_before: entry.before.clone(),
                    sample_after: entry.after.clone(),
                });
            }
        }
    }

    // sort_by is stable
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

/// Headline numbers for a history: total removed blocks and distinct texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_removed: usize,
    pub unique_groups: usize,
}

impl Summary {
    pub fn of(history: &[HistoryEntry], groups: &[Group]) -> Self {
        Self {
            total_removed: history.len(),
            unique_groups: groups.len(),
        }
    }
}
