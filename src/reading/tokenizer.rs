use crate::reading::token::{Token, TokenKind};

/// Splits text into alternating whitespace and word runs.
///
/// Every run of whitespace (counting U+FEFF) becomes one `Whitespace` token and every maximal run
/// of anything else becomes one `Word` token. No token is empty, and joining the
/// token texts in order gives back `text` byte for byte. Ids are assigned in
/// document order starting at zero.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut run_kind: Option<TokenKind> = None;

    for (offset, ch) in text.char_indices() {
        let kind = if is_separator(ch) {
            TokenKind::Whitespace
        } else {
            TokenKind::Word
        };

        match run_kind {
            Some(current) if current == kind => {}
            Some(current) => {
                push_run(&mut tokens, &text[run_start..offset], current);
                run_start = offset;
                run_kind = Some(kind);
            }
            None => run_kind = Some(kind),
        }
    }

    if let Some(kind) = run_kind {
        push_run(&mut tokens, &text[run_start..], kind);
    }

    tokens
}

/// Whitespace, plus the byte order mark some files and clipboards lead with.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

fn push_run(tokens: &mut Vec<Token>, slice: &str, kind: TokenKind) {
    let id = tokens.len();
    tokens.push(match kind {
        TokenKind::Whitespace => Token::whitespace(id, slice),
        TokenKind::Word => Token::word(id, slice),
    });
}

/// Joins token texts back into the document they describe.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Number of word tokens in a sequence.
pub fn word_count(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| t.is_word()).count()
}
