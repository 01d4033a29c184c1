/// Characters dropped before two words are compared.
const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')'];

/// Canonical comparison form of a word: punctuation stripped, then lowercased.
pub fn normalize(literal: &str) -> String {
    literal
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Canonical key for a markable word, or `None` when nothing is left after
/// stripping punctuation.
pub fn canonical_key(literal: &str) -> Option<String> {
    let key = normalize(literal);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Dog"), "dog");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("\"(Dog!?)\""), "dog");
        assert_eq!(normalize("dog.,;:"), "dog");
        assert_eq!(normalize("don't"), "dont");
    }

    #[test]
    fn test_normalize_keeps_other_symbols() {
        assert_eq!(normalize("e-mail"), "e-mail");
        assert_eq!(normalize("—"), "—");
    }

    #[test]
    fn test_canonical_key_same_word() {
        assert_eq!(canonical_key("dog."), canonical_key("Dog"));
    }

    #[test]
    fn test_canonical_key_pure_punctuation_is_not_markable() {
        assert_eq!(canonical_key("..."), None);
        assert_eq!(canonical_key("\"!\""), None);
    }

    #[test]
    fn test_canonical_key_unicode_lowercase() {
        assert_eq!(canonical_key("ÉCOLE,"), Some("école".to_string()));
    }
}
