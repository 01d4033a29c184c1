use std::path::PathBuf;

use super::event::AppEvent;
use super::mode::{AppMode, PendingAction};
use super::render_state::RenderState;
use crate::engine::{Config, SnagError};
use crate::input::{self, clipboard, LoadedDocument};
use crate::notes::NoteBook;
use crate::reading::{Activation, Session, TokenId};
use crate::report::{self, aggregate};
use crate::ui::command::{command_to_app_event, parse_command};

pub const HELP_TEXT: &str = "space mark · r remove · x hide · c clear · s summary · e export · y copy · n new · : command · q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// One-line message for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Warning,
        }
    }
}

pub struct App {
    mode: AppMode,
    /// Where Escape or a submitted command returns to
    return_mode: AppMode,
    session: Session,
    cursor: Option<TokenId>,
    config: Config,
    notes: NoteBook,
    input: String,
    notice: Option<Notice>,
    source: Option<String>,
}

impl App {
    pub fn new(config: Config, notes: NoteBook) -> Self {
        Self {
            mode: AppMode::Command,
            return_mode: AppMode::Command,
            session: Session::new(config.reader.hide_after_mark),
            cursor: None,
            config,
            notes,
            input: String::new(),
            notice: Some(Notice::info("Type @file, @@ for clipboard, or :type <text>")),
            source: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cursor(&self) -> Option<TokenId> {
        self.cursor
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::from_session(
            self.mode,
            &self.session,
            self.cursor,
            &self.input,
            self.notice.as_ref(),
            self.source.as_deref(),
        )
    }

    /// Applies one event. Failures become a warning notice; state is left as
    /// it was before the event.
    pub fn handle_event(&mut self, event: AppEvent) {
        tracing::trace!(?event, mode = ?self.mode, "event");
        if let Err(e) = self.dispatch(event) {
            tracing::warn!(error = %e, "operation failed");
            self.notice = Some(Notice::warning(e.to_string()));
        }
    }

    fn dispatch(&mut self, event: AppEvent) -> Result<(), SnagError> {
        match event {
            AppEvent::LoadFile(path) => self.load(input::load_path(&path)?),
            AppEvent::LoadClipboard => self.load(clipboard::load()?),
            AppEvent::LoadText(text) => self.load(LoadedDocument {
                text,
                source: "typed".to_string(),
            }),
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Ok(())
            }
            AppEvent::Help => {
                self.notice = Some(Notice::info(HELP_TEXT));
                Ok(())
            }
            AppEvent::Warning(message) => {
                self.notice = Some(Notice::warning(message));
                Ok(())
            }
            AppEvent::InvalidCommand(input) => {
                self.notice = Some(Notice::warning(format!("Unknown command: {}", input)));
                Ok(())
            }

            AppEvent::CursorNext => self.move_cursor(1),
            AppEvent::CursorPrev => self.move_cursor(-1),
            AppEvent::CursorForward => self.move_cursor(self.scroll_step()),
            AppEvent::CursorBack => self.move_cursor(-self.scroll_step()),
            AppEvent::ToggleMark => {
                let id = self.cursor.ok_or(SnagError::NoDocument)?;
                self.activate(id)
            }
            AppEvent::ActivateToken(id) => self.activate(id),
            AppEvent::ToggleHide => {
                self.require_document()?;
                let before = self.session.marked_count();
                let on = self.session.toggle_hide();
                let dropped = before - self.session.marked_count();
                self.settle_cursor();
                self.notice = Some(Notice::info(match (on, dropped) {
                    (false, _) => "Hide off".to_string(),
                    (true, 0) => "Hide on".to_string(),
                    (true, n) => format!("Hide on, {} hidden marks dropped", n),
                }));
                Ok(())
            }
            AppEvent::ClearMarks => {
                self.require_document()?;
                self.session.clear_marks();
                self.notice = Some(Notice::info("Cleared all marks"));
                Ok(())
            }
            AppEvent::RequestRemove => {
                self.require_document()?;
                if self.session.marks().is_empty() {
                    return Err(crate::reading::SessionError::NothingMarked.into());
                }
                self.request(PendingAction::Remove)
            }
            AppEvent::RequestNewDocument => self.request(PendingAction::NewDocument),
            AppEvent::Confirm => match self.mode {
                AppMode::Confirm(action) => {
                    self.mode = self.return_mode;
                    self.perform(action)
                }
                _ => Ok(()),
            },
            AppEvent::Cancel => {
                self.input.clear();
                self.mode = self.return_mode;
                Ok(())
            }

            AppEvent::ShowSummary => {
                self.return_mode = self.resting_mode();
                self.mode = AppMode::Summary;
                Ok(())
            }
            AppEvent::CloseSummary => {
                self.mode = self.resting_mode();
                self.return_mode = self.mode;
                Ok(())
            }
            AppEvent::ExportCsv(path) => self.export_csv(path),
            AppEvent::CopyReport => {
                let groups = aggregate(self.session.history());
                let text = report::to_clipboard_text(&groups)?;
                clipboard::copy(&text)?;
                self.notice = Some(Notice::info(format!("Copied {} lines", groups.len())));
                Ok(())
            }

            AppEvent::AddNote { category, text } => {
                let path = self.notes.append(&category, &text)?;
                self.notice = Some(Notice::info(format!("Note added to {}", path.display())));
                Ok(())
            }
            AppEvent::BindNoteFile { category, path } => {
                self.notes.bind(&category, PathBuf::from(&path))?;
                self.notice = Some(Notice::info(format!("'{}' notes go to {}", category, path)));
                Ok(())
            }

            AppEvent::EnterCommand => {
                if self.mode != AppMode::Command {
                    self.return_mode = self.mode;
                }
                self.input.clear();
                self.mode = AppMode::Command;
                Ok(())
            }
            AppEvent::InputChar(c) => {
                self.input.push(c);
                Ok(())
            }
            AppEvent::InputBackspace => {
                self.input.pop();
                Ok(())
            }
            AppEvent::SubmitInput => {
                let line = std::mem::take(&mut self.input);
                self.mode = match self.return_mode {
                    AppMode::Summary => AppMode::Summary,
                    _ => self.resting_mode(),
                };
                self.dispatch(command_to_app_event(parse_command(&line)))
            }
            AppEvent::None => Ok(()),
        }
    }

    /// Reading when a document is open, otherwise the command deck.
    fn resting_mode(&self) -> AppMode {
        if self.session.has_document() {
            AppMode::Reading
        } else {
            AppMode::Command
        }
    }

    fn require_document(&self) -> Result<(), SnagError> {
        if self.session.has_document() {
            Ok(())
        } else {
            Err(SnagError::NoDocument)
        }
    }

    fn scroll_step(&self) -> isize {
        self.config.reader.scroll_step.max(1) as isize
    }

    fn load(&mut self, document: LoadedDocument) -> Result<(), SnagError> {
        let words = self.session.start(&document.text)?;
        tracing::info!(source = %document.source, words, "document loaded");

        self.cursor = self.visible_words().first().copied();
        self.source = Some(document.source);
        self.mode = AppMode::Reading;
        self.return_mode = AppMode::Reading;
        self.notice = Some(Notice::info(format!("Loaded {} words", words)));
        Ok(())
    }

    /// Ids of words that are currently drawn, in document order.
    fn visible_words(&self) -> Vec<TokenId> {
        self.session
            .tokens()
            .iter()
            .enumerate()
            .filter(|(position, token)| token.is_word() && !self.session.is_hidden(*position))
            .map(|(_, token)| token.id)
            .collect()
    }

    fn move_cursor(&mut self, delta: isize) -> Result<(), SnagError> {
        self.require_document()?;
        let words = self.visible_words();
        if words.is_empty() {
            self.cursor = None;
            return Ok(());
        }
        let current = self
            .cursor
            .and_then(|id| words.iter().position(|w| *w == id))
            .unwrap_or(0);
        let target = (current as isize + delta).clamp(0, words.len() as isize - 1) as usize;
        self.cursor = Some(words[target]);
        Ok(())
    }

    /// After the document changes, put the cursor on the first visible word at
    /// or after where it was, or the last visible word.
    fn settle_cursor(&mut self) {
        let words = self.visible_words();
        self.cursor = match self.cursor {
            Some(old) => words
                .iter()
                .copied()
                .find(|id| *id >= old)
                .or_else(|| words.last().copied()),
            None => words.first().copied(),
        };
    }

    fn activate(&mut self, id: TokenId) -> Result<(), SnagError> {
        self.require_document()?;
        match self.session.handle_token_activation(id) {
            Activation::Marked => tracing::debug!(%id, "marked"),
            Activation::Unmarked => tracing::debug!(%id, "unmarked"),
            Activation::Ignored => {}
        }
        self.settle_cursor();
        Ok(())
    }

    fn request(&mut self, action: PendingAction) -> Result<(), SnagError> {
        if self.config.reader.confirm_destructive {
            self.return_mode = self.resting_mode();
            self.mode = AppMode::Confirm(action);
            Ok(())
        } else {
            self.perform(action)
        }
    }

    fn perform(&mut self, action: PendingAction) -> Result<(), SnagError> {
        match action {
            PendingAction::Remove => {
                let marked = self.session.marked_count();
                let blocks = self.session.remove_marked()?;
                tracing::info!(marked, blocks, "removed marked words");
                self.settle_cursor();
                self.notice = Some(Notice::info(format!(
                    "Removed {} words in {} blocks",
                    marked, blocks
                )));
            }
            PendingAction::NewDocument => {
                self.session.reset();
                self.cursor = None;
                self.source = None;
                self.input.clear();
                self.mode = AppMode::Command;
                self.return_mode = AppMode::Command;
                self.notice = Some(Notice::info("Ready for a new document"));
                tracing::info!("session reset");
            }
        }
        Ok(())
    }

    fn export_csv(&mut self, path: Option<String>) -> Result<(), SnagError> {
        let groups = aggregate(self.session.history());
        let path = PathBuf::from(path.unwrap_or_else(|| self.config.export.csv_file_name.clone()));
        report::write_csv(&groups, &path)?;
        self.notice = Some(Notice::info(format!(
            "Exported {} rows to {}",
            groups.len(),
            path.display()
        )));
        Ok(())
    }
}
