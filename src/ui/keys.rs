use crate::app::{AppEvent, AppMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into an AppEvent for the current mode.
pub fn key_to_event(mode: AppMode, key: KeyEvent) -> AppEvent {
    if key.kind != KeyEventKind::Press {
        return AppEvent::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }

    match mode {
        AppMode::Command => match key.code {
            KeyCode::Enter => AppEvent::SubmitInput,
            KeyCode::Backspace => AppEvent::InputBackspace,
            KeyCode::Esc => AppEvent::Cancel,
            KeyCode::Char(c) => AppEvent::InputChar(c),
            _ => AppEvent::None,
        },
        AppMode::Reading => match key.code {
            KeyCode::Right | KeyCode::Char('l') => AppEvent::CursorNext,
            KeyCode::Left | KeyCode::Char('h') => AppEvent::CursorPrev,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::CursorForward,
            KeyCode::Up | KeyCode::Char('k') => AppEvent::CursorBack,
            KeyCode::Char(' ') | KeyCode::Enter => AppEvent::ToggleMark,
            KeyCode::Char('x') => AppEvent::ToggleHide,
            KeyCode::Char('r') => AppEvent::RequestRemove,
            KeyCode::Char('c') => AppEvent::ClearMarks,
            KeyCode::Char('s') => AppEvent::ShowSummary,
            KeyCode::Char('e') => AppEvent::ExportCsv(None),
            KeyCode::Char('y') => AppEvent::CopyReport,
            KeyCode::Char('n') => AppEvent::RequestNewDocument,
            KeyCode::Char(':') => AppEvent::EnterCommand,
            KeyCode::Char('?') => AppEvent::Help,
            KeyCode::Char('q') => AppEvent::Quit,
            _ => AppEvent::None,
        },
        AppMode::Summary => match key.code {
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => AppEvent::CloseSummary,
            KeyCode::Char('e') => AppEvent::ExportCsv(None),
            KeyCode::Char('y') => AppEvent::CopyReport,
            KeyCode::Char(':') => AppEvent::EnterCommand,
            _ => AppEvent::None,
        },
        AppMode::Confirm(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => AppEvent::Confirm,
            KeyCode::Char('n') | KeyCode::Esc => AppEvent::Cancel,
            _ => AppEvent::None,
        },
        AppMode::Quit => AppEvent::None,
    }
}
