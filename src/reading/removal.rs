use std::collections::HashSet;

use crate::reading::blocks::{group_blocks, Block};
use crate::reading::error::SessionError;
use crate::reading::mark_set::MarkSet;
use crate::reading::normalize::canonical_key;
use crate::reading::token::{Token, TokenId};

/// Immutable record of one removed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub marked_text: String,
    pub before: Option<String>,
    pub after: Option<String>,
}

impl From<Block> for HistoryEntry {
    fn from(block: Block) -> Self {
        Self {
            marked_text: block.marked_text,
            before: block.before,
            after: block.after,
        }
    }
}

/// Result of a removal: the surviving tokens and the blocks that went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub tokens: Vec<Token>,
    pub entries: Vec<HistoryEntry>,
}

/// Drops every word whose canonical key is marked.
///
/// Blocks are captured from the marked tokens first, so each becomes a
/// history entry with its context. Whitespace around a removed word stays
/// where it was, even when that leaves two runs side by side. Surviving
/// tokens keep their ids.
///
/// Pure: the caller decides whether to commit the result.
pub fn remove_marked(
    tokens: &[Token],
    marked: &HashSet<TokenId>,
    marks: &MarkSet,
) -> Result<Removal, SessionError> {
    if marks.is_empty() {
        return Err(SessionError::NothingMarked);
    }

    let entries = group_blocks(tokens, marked)?
        .into_iter()
        .map(HistoryEntry::from)
        .collect();

    let tokens = tokens
        .iter()
        .filter(|t| {
            !(t.is_word()
                && canonical_key(&t.text)
                    .map(|key| marks.is_marked(&key))
                    .unwrap_or(false))
        })
        .cloned()
        .collect();

    Ok(Removal { tokens, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::tokenizer::{reconstruct, tokenize};

    fn mark(tokens: &[Token], words: &[&str]) -> (HashSet<TokenId>, MarkSet) {
        let mut ids = HashSet::new();
        let mut marks = MarkSet::new();
        for token in tokens.iter().filter(|t| t.is_word()) {
            if words.contains(&token.text.as_str()) {
                ids.insert(token.id);
                marks.mark(&canonical_key(&token.text).unwrap());
            }
        }
        (ids, marks)
    }

    #[test]
    fn test_remove_with_nothing_marked() {
        let tokens = tokenize("The dog ran");
        let result = remove_marked(&tokens, &HashSet::new(), &MarkSet::new());
        assert_eq!(result, Err(SessionError::NothingMarked));
    }

    #[test]
    fn test_remove_keeps_surrounding_whitespace() {
        let tokens = tokenize("The dog ran");
        let (ids, marks) = mark(&tokens, &["dog"]);
        let removal = remove_marked(&tokens, &ids, &marks).unwrap();
        assert_eq!(reconstruct(&removal.tokens), "The  ran");
    }

    #[test]
    fn test_remove_records_block_context() {
        let tokens = tokenize("The dog ran");
        let (ids, marks) = mark(&tokens, &["dog"]);
        let removal = remove_marked(&tokens, &ids, &marks).unwrap();
        assert_eq!(
            removal.entries,
            vec![HistoryEntry {
                marked_text: "dog".to_string(),
                before: Some("The".to_string()),
                after: Some("ran".to_string()),
            }]
        );
    }

    #[test]
    fn test_remove_drops_every_word_with_a_marked_key() {
        let tokens = tokenize("Dog and dog. and DOG!");
        let (ids, marks) = mark(&tokens, &["Dog"]);
        let removal = remove_marked(&tokens, &ids, &marks).unwrap();
        assert_eq!(reconstruct(&removal.tokens), " and  and ");
        assert_eq!(removal.entries.len(), 1);
    }

    #[test]
    fn test_remove_preserves_ids_of_survivors() {
        let tokens = tokenize("The dog ran");
        let (ids, marks) = mark(&tokens, &["dog"]);
        let removal = remove_marked(&tokens, &ids, &marks).unwrap();
        let kept: Vec<usize> = removal.tokens.iter().map(|t| t.id.0).collect();
        assert_eq!(kept, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_removed_text_does_not_return_on_retokenize() {
        let tokens = tokenize("so very very tired");
        let (ids, marks) = mark(&tokens, &["very"]);
        let removal = remove_marked(&tokens, &ids, &marks).unwrap();
        let text = reconstruct(&removal.tokens);
        assert!(tokenize(&text).iter().all(|t| t.text != "very"));
    }

    #[test]
    fn test_remove_aborts_on_unknown_token() {
        let tokens = tokenize("The dog ran");
        let (mut ids, marks) = mark(&tokens, &["dog"]);
        ids.insert(TokenId(42));
        assert_eq!(
            remove_marked(&tokens, &ids, &marks),
            Err(SessionError::UnknownToken(TokenId(42)))
        );
    }
}
