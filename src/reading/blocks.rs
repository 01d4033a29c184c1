use std::collections::HashSet;

use crate::reading::error::SessionError;
use crate::reading::token::{Token, TokenId};

/// A maximal run of marked words plus the nearest unmarked word on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Literal texts of the block's words joined with single spaces.
    pub marked_text: String,
    pub before: Option<String>,
    pub after: Option<String>,
}

/// Groups marked words into blocks, in document order.
///
/// Adjacency is over words only: whitespace between two marked words never
/// breaks a block, and whitespace is never part of one. Context is the literal
/// text of the closest word outside the block, or `None` at a document edge.
///
/// Every id in `marked` must name a word in `tokens`; otherwise nothing is
/// grouped and `UnknownToken` is returned.
pub fn group_blocks(
    tokens: &[Token],
    marked: &HashSet<TokenId>,
) -> Result<Vec<Block>, SessionError> {
    let words: Vec<&Token> = tokens.iter().filter(|t| t.is_word()).collect();
    let word_ids: HashSet<TokenId> = words.iter().map(|w| w.id).collect();

    if let Some(&missing) = marked
        .iter()
        .filter(|id| !word_ids.contains(*id))
        .min()
    {
        return Err(SessionError::UnknownToken(missing));
    }

    let mut blocks = Vec::new();
    let mut i = 0;

    while i < words.len() {
        if !marked.contains(&words[i].id) {
            i += 1;
            continue;
        }

        let start = i;
        while i < words.len() && marked.contains(&words[i].id) {
            i += 1;
        }

        let marked_text = words[start..i]
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        blocks.push(Block {
            marked_text,
            before: start.checked_sub(1).map(|p| words[p].text.clone()),
            after: words.get(i).map(|w| w.text.clone()),
        });
    }

    Ok(blocks)
}
