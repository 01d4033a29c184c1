use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid file encoding: {0}")]
    InvalidEncoding(PathBuf),

    #[error("No text found in {0}")]
    Empty(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Raw text pulled from some source, not yet tokenized.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod pdf;
pub mod text;

/// Loads a file, picking the reader from its extension.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let is_pdf = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        pdf::load(path)
    } else {
        text::load(path)
    }
}
