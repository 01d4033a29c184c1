use std::collections::HashSet;

use crate::reading::blocks::{group_blocks, Block};
use crate::reading::error::SessionError;
use crate::reading::mark_set::MarkSet;
use crate::reading::normalize::canonical_key;
use crate::reading::removal::{remove_marked, HistoryEntry};
use crate::reading::token::{Token, TokenId};
use crate::reading::tokenizer::{reconstruct, tokenize, word_count};

/// What activating a token did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Marked,
    Unmarked,
    /// Whitespace, pure punctuation, hidden or unknown tokens.
    Ignored,
}

/// All state for one reading session.
///
/// Owns the token sequence, the marks and the removal history. Renderers read
/// from it and report activations back through `handle_token_activation`.
#[derive(Debug, Default)]
pub struct Session {
    tokens: Vec<Token>,
    marked: HashSet<TokenId>,
    marks: MarkSet,
    history: Vec<HistoryEntry>,
    hide_enabled: bool,
    /// First hidden position. Only set while hide is on and a word is marked;
    /// positions stay valid because any change to `tokens` clears it.
    hidden_from: Option<usize>,
}

impl Session {
    pub fn new(hide_enabled: bool) -> Self {
        Self {
            hide_enabled,
            ..Self::default()
        }
    }

    /// Loads a fresh document, dropping marks and history from the last one.
    ///
    /// Text that is empty or whitespace only is rejected and leaves the session
    /// untouched.
    pub fn start(&mut self, text: &str) -> Result<usize, SessionError> {
        if text.trim().is_empty() {
            return Err(SessionError::EmptyDocument);
        }
        let tokens = tokenize(text);
        let words = word_count(&tokens);
        self.reset();
        self.tokens = tokens;
        Ok(words)
    }

    /// Back to an empty session. The hide toggle is a preference and survives.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.marked.clear();
        self.marks.clear();
        self.history.clear();
        self.hidden_from = None;
    }

    pub fn has_document(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn text(&self) -> String {
        reconstruct(&self.tokens)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    pub fn is_marked(&self, id: TokenId) -> bool {
        self.marked.contains(&id)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    pub fn hide_enabled(&self) -> bool {
        self.hide_enabled
    }

    /// Position from which rendering is suppressed, if anything is hidden.
    pub fn hidden_from(&self) -> Option<usize> {
        self.hidden_from
    }

    pub fn is_hidden(&self, position: usize) -> bool {
        self.hidden_from.is_some_and(|from| position >= from)
    }

    fn position(&self, id: TokenId) -> Option<usize> {
        self.tokens.iter().position(|t| t.id == id)
    }

    /// Toggles the mark on a word.
    ///
    /// Marked tokens are unmarked and vice versa, so repeated activations never
    /// count the same token twice. With hide on, the hidden point follows the
    /// earliest marked word, and marks it would cover are dropped.
    pub fn handle_token_activation(&mut self, id: TokenId) -> Activation {
        let Some(position) = self.position(id) else {
            return Activation::Ignored;
        };
        if self.is_hidden(position) {
            return Activation::Ignored;
        }
        let token = &self.tokens[position];
        if !token.is_word() {
            return Activation::Ignored;
        }
        let Some(key) = canonical_key(&token.text) else {
            return Activation::Ignored;
        };

        let activation = if self.marked.remove(&id) {
            self.marks.unmark(&key);
            Activation::Unmarked
        } else {
            self.marked.insert(id);
            self.marks.mark(&key);
            Activation::Marked
        };
        self.refresh_hidden();
        activation
    }

    /// Recomputes the hidden point from the earliest marked word and unmarks
    /// anything past it, so every marked word stays visible.
    fn refresh_hidden(&mut self) {
        if !self.hide_enabled {
            self.hidden_from = None;
            return;
        }
        let Some(anchor) = self
            .tokens
            .iter()
            .position(|t| self.marked.contains(&t.id))
        else {
            self.hidden_from = None;
            return;
        };

        let from = anchor + 1;
        self.hidden_from = Some(from);

        let covered: Vec<(TokenId, String)> = self.tokens[from..]
            .iter()
            .filter(|t| self.marked.contains(&t.id))
            .filter_map(|t| canonical_key(&t.text).map(|key| (t.id, key)))
            .collect();
        for (id, key) in &covered {
            self.marked.remove(id);
            self.marks.unmark(key);
        }
        if !covered.is_empty() {
            tracing::debug!(dropped = covered.len(), "marks covered by hide dropped");
        }
    }

    /// Drops every mark and reveals anything hidden.
    pub fn clear_marks(&mut self) {
        self.marked.clear();
        self.marks.clear();
        self.hidden_from = None;
    }

    /// Flips the hide toggle and returns the new state. Turning it on with
    /// words already marked hides from the earliest of them; turning it off
    /// reveals the rest of the document.
    pub fn toggle_hide(&mut self) -> bool {
        self.hide_enabled = !self.hide_enabled;
        self.refresh_hidden();
        self.hide_enabled
    }

    /// Current blocks, for inspection without removing anything.
    pub fn blocks(&self) -> Result<Vec<Block>, SessionError> {
        group_blocks(&self.tokens, &self.marked)
    }

    /// Removes marked words and appends their blocks to the history.
    ///
    /// Returns the number of blocks recorded. On error nothing changes.
    pub fn remove_marked(&mut self) -> Result<usize, SessionError> {
        let removal = remove_marked(&self.tokens, &self.marked, &self.marks)?;
        let recorded = removal.entries.len();

        self.tokens = removal.tokens;
        self.history.extend(removal.entries);
        self.marked.clear();
        self.marks.clear();
        self.hidden_from = None;

        Ok(recorded)
    }
}
