use std::fmt;

/// Stable identifier for a token.
///
/// Assigned once when a document is tokenized and kept by every token that
/// survives a removal, so marks and cursors never depend on sequence position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub usize);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    Word,
}

/// One slice of the document: a whitespace run or a word run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    /// Exact source text, casing and punctuation included.
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn word(id: usize, text: &str) -> Self {
        Self {
            id: TokenId(id),
            text: text.to_string(),
            kind: TokenKind::Word,
        }
    }

    pub fn whitespace(id: usize, text: &str) -> Self {
        Self {
            id: TokenId(id),
            text: text.to_string(),
            kind: TokenKind::Whitespace,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
