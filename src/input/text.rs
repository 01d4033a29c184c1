use super::{LoadError, LoadedDocument};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a UTF-8 text file. Files that are empty or whitespace only are
/// rejected.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        ErrorKind::InvalidData => LoadError::InvalidEncoding(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    if content.trim().is_empty() {
        return Err(LoadError::Empty(path.display().to_string()));
    }

    Ok(LoadedDocument {
        text: content,
        source: format!("file:{}", path.display()),
    })
}
