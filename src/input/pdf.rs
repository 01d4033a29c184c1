use super::{LoadError, LoadedDocument};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Separator placed between extracted pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Load text from a PDF file using the pdf-extract crate.
///
/// Pages are extracted one at a time and joined with a blank line. A PDF with
/// no extractable text is reported as `Empty` so nothing downstream runs on it.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    // Read PDF file into memory
    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    for (number, page) in pages.iter().enumerate() {
        tracing::debug!(page = number + 1, chars = page.len(), "extracted pdf page");
    }

    let text = join_pages(&pages);
    if text.trim().is_empty() {
        return Err(LoadError::Empty(path.display().to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}", path.display()),
    })
}

/// Joins page texts with a blank line between each.
pub fn join_pages(pages: &[String]) -> String {
    pages.join(PAGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that load returns FileNotFound for non-existent files.
    #[test]
    fn test_pdf_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.pdf");
        assert!(result.is_err());
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_pdf_load_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"definitely not a pdf").unwrap();
        let result = load(path.to_str().unwrap());
        assert!(matches!(result, Err(LoadError::PdfParse(_))));
    }

    #[test]
    fn test_join_pages_uses_blank_lines() {
        let pages = vec!["first page".to_string(), "second page".to_string()];
        assert_eq!(join_pages(&pages), "first page\n\nsecond page");
    }

    #[test]
    fn test_pdf_parse_error_message() {
        let err = LoadError::PdfParse("Invalid PDF structure".to_string());
        assert_eq!(err.to_string(), "PDF parse error: Invalid PDF structure");
    }
}
