use super::{ExportError, Group};

/// `before [marked] after (Nx)`, leaving out whichever context is missing.
pub fn format_line(group: &Group) -> String {
    let marked = format!("[{}]", group.marked_text);
    let count = format!("({}x)", group.count);
    [
        group.sample_before.as_deref(),
        Some(marked.as_str()),
        group.sample_after.as_deref(),
        Some(count.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
}

/// One formatted line per group, newline separated, ready for the clipboard.
pub fn to_clipboard_text(groups: &[Group]) -> Result<String, ExportError> {
    if groups.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    Ok(groups.iter().map(format_line).collect::<Vec<_>>().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_full_context() {
        let group = Group {
            marked_text: "dog".to_string(),
            count: 2,
            sample_before: Some("my".to_string()),
            sample_after: Some("runs".to_string()),
        };
        assert_eq!(format_line(&group), "my [dog] runs (2x)");
    }

    #[test]
    fn test_format_line_at_edges() {
        let group = Group {
            marked_text: "The".to_string(),
            count: 1,
            sample_before: None,
            sample_after: None,
        };
        assert_eq!(format_line(&group), "[The] (1x)");
    }

    #[test]
    fn test_to_clipboard_text_joins_lines() {
        let groups = vec![
            Group {
                marked_text: "a".to_string(),
                count: 3,
                sample_before: None,
                sample_after: Some("b".to_string()),
            },
            Group {
                marked_text: "c".to_string(),
                count: 1,
                sample_before: Some("b".to_string()),
                sample_after: None,
            },
        ];
        assert_eq!(
            to_clipboard_text(&groups).unwrap(),
            "[a] b (3x)\nb [c] (1x)"
        );
    }

    #[test]
    fn test_to_clipboard_text_empty_is_error() {
        assert!(matches!(
            to_clipboard_text(&[]),
            Err(ExportError::NothingToExport)
        ));
    }
}
