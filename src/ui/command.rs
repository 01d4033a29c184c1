//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `@filename` → Load a text or PDF file
//! - `@@` → Load clipboard
//! - `:type <text>` → Read the typed text
//! - `:q` / `:h` → Quit / help
//! - `:remove`, `:clear`, `:hide`, `:summary`, `:new`, `:copy`
//! - `:export [path]` → Write the summary CSV
//! - `:note <category> <text>` / `:notefile <category> <path>`

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    LoadText(String),
    Remove,
    Clear,
    Hide,
    Summary,
    New,
    Export(Option<String>),
    Copy,
    Note { category: String, text: String },
    NoteFile { category: String, path: String },
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(rest) = input.strip_prefix(':') {
        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };
        match (name, args) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("remove", "") => Command::Remove,
            ("clear", "") => Command::Clear,
            ("hide", "") => Command::Hide,
            ("summary", "") => Command::Summary,
            ("new", "") => Command::New,
            ("copy", "") => Command::Copy,
            ("export", "") => Command::Export(None),
            ("export", path) => Command::Export(Some(path.to_string())),
            ("type", text) if !text.is_empty() => Command::LoadText(text.to_string()),
            ("note", args) => match split_first_word(args) {
                Some((category, text)) => Command::Note {
                    category: category.to_string(),
                    text: text.to_string(),
                },
                None => Command::Unknown(input.to_string()),
            },
            ("notefile", args) => match split_first_word(args) {
                Some((category, path)) => Command::NoteFile {
                    category: category.to_string(),
                    path: path.to_string(),
                },
                None => Command::Unknown(input.to_string()),
            },
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// `"idea buy milk"` → `("idea", "buy milk")`; both parts must be non-empty.
fn split_first_word(args: &str) -> Option<(&str, &str)> {
    let (first, rest) = args.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if first.is_empty() || rest.is_empty() {
        None
    } else {
        Some((first, rest))
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::LoadText(text) => AppEvent::LoadText(text),
        Command::Remove => AppEvent::RequestRemove,
        Command::Clear => AppEvent::ClearMarks,
        Command::Hide => AppEvent::ToggleHide,
        Command::Summary => AppEvent::ShowSummary,
        Command::New => AppEvent::RequestNewDocument,
        Command::Export(path) => AppEvent::ExportCsv(path),
        Command::Copy => AppEvent::CopyReport,
        Command::Note { category, text } => AppEvent::AddNote { category, text },
        Command::NoteFile { category, path } => AppEvent::BindNoteFile { category, path },
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
