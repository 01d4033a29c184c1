use crate::app::app::Notice;
use crate::app::mode::AppMode;
use crate::reading::{Session, TokenId, TokenKind};
use crate::report::{aggregate, Group, Summary};

/// A token as the renderer should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderToken {
    pub id: TokenId,
    pub text: String,
    pub kind: TokenKind,
    pub marked: bool,
    pub hidden: bool,
    pub cursor: bool,
}

/// Render state for UI components
///
/// Built fresh from the session each frame; the UI never writes back to it.
pub struct RenderState {
    pub mode: AppMode,
    pub tokens: Vec<RenderToken>,
    pub input: String,
    pub notice: Option<Notice>,
    pub source: Option<String>,
    pub hide_enabled: bool,
    pub marked_words: usize,
    pub groups: Vec<Group>,
    pub summary: Summary,
    /// (cursor word number, visible words)
    pub progress: (usize, usize),
}

impl RenderState {
    pub fn from_session(
        mode: AppMode,
        session: &Session,
        cursor: Option<TokenId>,
        input: &str,
        notice: Option<&Notice>,
        source: Option<&str>,
    ) -> Self {
        let tokens: Vec<RenderToken> = session
            .tokens()
            .iter()
            .enumerate()
            .map(|(position, token)| RenderToken {
                id: token.id,
                text: token.text.clone(),
                kind: token.kind,
                marked: session.is_marked(token.id),
                hidden: session.is_hidden(position),
                cursor: cursor == Some(token.id),
            })
            .collect();

        let visible_words: Vec<&RenderToken> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word && !t.hidden)
            .collect();
        let cursor_word = visible_words
            .iter()
            .position(|t| t.cursor)
            .map_or(0, |p| p + 1);
        let progress = (cursor_word, visible_words.len());

        let groups = aggregate(session.history());
        let summary = Summary::of(session.history(), &groups);

        Self {
            mode,
            tokens,
            input: input.to_string(),
            notice: notice.cloned(),
            source: source.map(str::to_string),
            hide_enabled: session.hide_enabled(),
            marked_words: session.marked_count(),
            groups,
            summary,
            progress,
        }
    }
}
