//! Categorized personal notes.
//!
//! Each category ("idea", "question", ...) is bound to a file the user picked.
//! Bindings persist as JSON so they survive restarts; notes are appended to the
//! bound file one per line. Nothing in the reading core depends on this.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("No file bound for note category '{0}'")]
    UnboundCategory(String),

    #[error("Note is empty")]
    EmptyNote,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Note store error: {0}")]
    Store(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct Bindings {
    #[serde(default)]
    categories: BTreeMap<String, PathBuf>,
}

#[derive(Debug)]
pub struct NoteBook {
    bindings: Bindings,
    store: Option<PathBuf>,
}

impl NoteBook {
    /// A notebook that keeps bindings in memory only.
    pub fn in_memory() -> Self {
        Self {
            bindings: Bindings::default(),
            store: None,
        }
    }

    /// Opens the notebook persisted at `store`. A missing store starts empty.
    pub fn open(store: &Path) -> Result<Self, NoteError> {
        let bindings = match fs::read_to_string(store) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Bindings::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            bindings,
            store: Some(store.to_path_buf()),
        })
    }

    pub fn path_for(&self, category: &str) -> Option<&Path> {
        self.bindings.categories.get(category).map(PathBuf::as_path)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.bindings.categories.keys().map(String::as_str)
    }

    /// Binds `category` to `path` and persists the binding.
    pub fn bind(&mut self, category: &str, path: PathBuf) -> Result<(), NoteError> {
        self.bindings
            .categories
            .insert(category.to_string(), path);
        self.save()
    }

    /// Appends `text` as one line to the file bound to `category`.
    pub fn append(&self, category: &str, text: &str) -> Result<PathBuf, NoteError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(NoteError::EmptyNote);
        }
        let path = self
            .path_for(category)
            .ok_or_else(|| NoteError::UnboundCategory(category.to_string()))?;

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", text)?;

        tracing::info!(category, path = %path.display(), "appended note");
        Ok(path.to_path_buf())
    }

    fn save(&self) -> Result<(), NoteError> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        if let Some(parent) = store.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(store, serde_json::to_string_pretty(&self.bindings)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_unbound_category() {
        let notes = NoteBook::in_memory();
        assert!(matches!(
            notes.append("idea", "something"),
            Err(NoteError::UnboundCategory(c)) if c == "idea"
        ));
    }

    #[test]
    fn test_append_empty_note() {
        let mut notes = NoteBook::in_memory();
        let dir = tempfile::tempdir().unwrap();
        notes.bind("idea", dir.path().join("ideas.txt")).unwrap();
        assert!(matches!(notes.append("idea", "   "), Err(NoteError::EmptyNote)));
    }

    #[test]
    fn test_append_writes_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ideas.txt");
        let mut notes = NoteBook::in_memory();
        notes.bind("idea", target.clone()).unwrap();

        notes.append("idea", "first").unwrap();
        notes.append("idea", "second").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_bindings_persist_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("state").join("notes.json");
        let target = dir.path().join("questions.txt");

        let mut notes = NoteBook::open(&store).unwrap();
        notes.bind("question", target.clone()).unwrap();

        let reopened = NoteBook::open(&store).unwrap();
        assert_eq!(reopened.path_for("question"), Some(target.as_path()));
        assert_eq!(reopened.categories().collect::<Vec<_>>(), vec!["question"]);
    }

    #[test]
    fn test_corrupt_store_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("notes.json");
        fs::write(&store, "{not json").unwrap();
        assert!(matches!(NoteBook::open(&store), Err(NoteError::Store(_))));
    }
}
