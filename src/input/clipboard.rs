use super::{LoadError, LoadedDocument};
use arboard::Clipboard;

/// Load the clipboard's text as a document.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::Empty("clipboard".to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
    })
}

/// Put `text` on the clipboard.
pub fn copy(text: &str) -> Result<(), LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| LoadError::Clipboard(e.to_string()))
}
