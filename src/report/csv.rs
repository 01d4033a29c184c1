use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::{ExportError, Group};

pub const CSV_HEADER: &str = "Removed Word(s),Context Before,Context After,Count";

/// Serializes groups as CSV: a bare header line, then one fully quoted row
/// per group. Missing context is written as an empty field.
pub fn to_csv(groups: &[Group]) -> Result<String, ExportError> {
    if groups.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for group in groups {
        let count = group.count.to_string();
        writer.write_record([
            group.marked_text.as_str(),
            group.sample_before.as_deref().unwrap_or(""),
            group.sample_after.as_deref().unwrap_or(""),
            count.as_str(),
        ])?;
    }

    let rows = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;

    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + rows.len());
    out.push_str(CSV_HEADER);
    out.push('\n');
    out.push_str(&String::from_utf8_lossy(&rows));
    Ok(out)
}

/// Writes the CSV for `groups` to `path` as UTF-8.
pub fn write_csv(groups: &[Group], path: &Path) -> Result<(), ExportError> {
    let content = to_csv(groups)?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), rows = groups.len(), "exported csv");
    Ok(())
}
