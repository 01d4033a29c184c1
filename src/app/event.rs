use crate::reading::TokenId;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadText(String),
    Quit,
    Help,
    Warning(String),
    InvalidCommand(String),

    CursorNext,
    CursorPrev,
    CursorForward,
    CursorBack,
    /// Toggle the mark on the word under the cursor
    ToggleMark,
    /// Toggle the mark on a specific word
    ActivateToken(TokenId),
    ToggleHide,
    ClearMarks,
    RequestRemove,
    RequestNewDocument,
    Confirm,
    Cancel,

    ShowSummary,
    CloseSummary,
    ExportCsv(Option<String>),
    CopyReport,

    AddNote { category: String, text: String },
    BindNoteFile { category: String, path: String },

    EnterCommand,
    InputChar(char),
    InputBackspace,
    SubmitInput,
    None,
}
