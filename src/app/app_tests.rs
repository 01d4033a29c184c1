use crate::app::app::NoticeLevel;
use crate::app::mode::{AppMode, PendingAction};
use crate::app::{App, AppEvent};
use crate::engine::Config;
use crate::notes::NoteBook;

fn app() -> App {
    App::new(Config::default(), NoteBook::in_memory())
}

fn app_without_prompts() -> App {
    let mut config = Config::default();
    config.reader.confirm_destructive = false;
    App::new(config, NoteBook::in_memory())
}

fn type_command(app: &mut App, line: &str) {
    app.handle_event(AppEvent::EnterCommand);
    for c in line.chars() {
        app.handle_event(AppEvent::InputChar(c));
    }
    app.handle_event(AppEvent::SubmitInput);
}

fn cursor_text(app: &App) -> String {
    let id = app.cursor().unwrap();
    app.session()
        .tokens()
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.text.clone())
        .unwrap()
}

#[test]
fn test_app_starts_in_command_mode() {
    let app = app();
    assert_eq!(app.mode(), AppMode::Command);
    assert!(app.cursor().is_none());
}

#[test]
fn test_app_handle_event_quit() {
    let mut app = app();
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn test_load_text_enters_reading_with_cursor_on_first_word() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("  The dog ran".to_string()));
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(cursor_text(&app), "The");
}

#[test]
fn test_load_blank_text_warns_and_stays() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("   ".to_string()));
    assert_eq!(app.mode(), AppMode::Command);
    assert_eq!(app.notice().unwrap().level, NoticeLevel::Warning);
}

#[test]
fn test_load_missing_file_warns() {
    let mut app = app();
    app.handle_event(AppEvent::LoadFile("/no/such/file.txt".to_string()));
    assert_eq!(app.mode(), AppMode::Command);
    assert!(app.notice().unwrap().text.contains("File not found"));
}

#[test]
fn test_cursor_moves_over_words_and_clamps() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("a b c".to_string()));
    app.handle_event(AppEvent::CursorPrev);
    assert_eq!(cursor_text(&app), "a");
    app.handle_event(AppEvent::CursorNext);
    assert_eq!(cursor_text(&app), "b");
    app.handle_event(AppEvent::CursorForward);
    assert_eq!(cursor_text(&app), "c");
}

#[test]
fn test_toggle_mark_at_cursor() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("The dog ran".to_string()));
    app.handle_event(AppEvent::CursorNext);
    app.handle_event(AppEvent::ToggleMark);
    assert_eq!(app.session().marks().count("dog"), 1);
    app.handle_event(AppEvent::ToggleMark);
    assert!(app.session().marks().is_empty());
}

#[test]
fn test_remove_waits_for_confirmation() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("The dog ran".to_string()));
    app.handle_event(AppEvent::CursorNext);
    app.handle_event(AppEvent::ToggleMark);
    app.handle_event(AppEvent::RequestRemove);
    assert_eq!(app.mode(), AppMode::Confirm(PendingAction::Remove));

    app.handle_event(AppEvent::Cancel);
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.session().text(), "The dog ran");

    app.handle_event(AppEvent::RequestRemove);
    app.handle_event(AppEvent::Confirm);
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.session().text(), "The  ran");
    assert_eq!(cursor_text(&app), "ran");
}

#[test]
fn test_remove_with_nothing_marked_is_a_notice() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("The dog ran".to_string()));
    app.handle_event(AppEvent::RequestRemove);
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.notice().unwrap().text, "Nothing marked to remove");
}

#[test]
fn test_new_document_resets_session() {
    let mut app = app_without_prompts();
    app.handle_event(AppEvent::LoadText("The dog ran".to_string()));
    app.handle_event(AppEvent::ToggleMark);
    app.handle_event(AppEvent::RequestRemove);
    assert_eq!(app.session().history().len(), 1);

    app.handle_event(AppEvent::RequestNewDocument);
    assert_eq!(app.mode(), AppMode::Command);
    assert!(!app.session().has_document());
    assert!(app.session().history().is_empty());
}

#[test]
fn test_hidden_words_are_skipped_by_cursor() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("a b c d".to_string()));
    app.handle_event(AppEvent::ToggleHide);
    app.handle_event(AppEvent::CursorNext);
    app.handle_event(AppEvent::ToggleMark);
    app.handle_event(AppEvent::CursorForward);
    assert_eq!(cursor_text(&app), "b");
}

#[test]
fn test_command_deck_round_trip() {
    let mut app = app();
    type_command(&mut app, ":type I love my dog.");
    assert_eq!(app.mode(), AppMode::Reading);
    assert_eq!(app.session().text(), "I love my dog.");
    assert!(app.input().is_empty());
}

#[test]
fn test_unknown_command_returns_to_reading() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("words here".to_string()));
    type_command(&mut app, ":frobnicate");
    assert_eq!(app.mode(), AppMode::Reading);
    assert!(app.notice().unwrap().text.contains("Unknown command"));
}

#[test]
fn test_summary_mode_round_trip() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("words here".to_string()));
    app.handle_event(AppEvent::ShowSummary);
    assert_eq!(app.mode(), AppMode::Summary);
    app.handle_event(AppEvent::CloseSummary);
    assert_eq!(app.mode(), AppMode::Reading);
}

#[test]
fn test_command_from_summary_returns_to_summary() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("words here".to_string()));
    app.handle_event(AppEvent::ShowSummary);
    type_command(&mut app, ":h");
    assert_eq!(app.mode(), AppMode::Summary);

    app.handle_event(AppEvent::CloseSummary);
    assert_eq!(app.mode(), AppMode::Reading);
}

#[test]
fn test_hide_on_drops_marks_it_covers() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("a b c d".to_string()));
    app.handle_event(AppEvent::CursorNext);
    app.handle_event(AppEvent::ToggleMark);
    app.handle_event(AppEvent::CursorForward);
    app.handle_event(AppEvent::ToggleMark);
    assert_eq!(app.session().marked_count(), 2);

    app.handle_event(AppEvent::ToggleHide);
    assert_eq!(app.session().marked_count(), 1);
    assert_eq!(cursor_text(&app), "b");
    assert!(app.notice().unwrap().text.contains("1 hidden marks dropped"));
}

#[test]
fn test_export_csv_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let mut app = app_without_prompts();
    app.handle_event(AppEvent::LoadText("The dog ran".to_string()));
    app.handle_event(AppEvent::CursorNext);
    app.handle_event(AppEvent::ToggleMark);
    app.handle_event(AppEvent::RequestRemove);
    app.handle_event(AppEvent::ExportCsv(Some(path.to_string_lossy().to_string())));

    let csv = std::fs::read_to_string(&path).unwrap();
    assert!(csv.contains("\"dog\",\"The\",\"ran\",\"1\""));
}

#[test]
fn test_export_with_empty_history_warns() {
    let mut app = app();
    app.handle_event(AppEvent::LoadText("The dog ran".to_string()));
    app.handle_event(AppEvent::ExportCsv(Some("never-written.csv".to_string())));
    assert_eq!(app.notice().unwrap().text, "Nothing removed yet");
    assert!(!std::path::Path::new("never-written.csv").exists());
}

#[test]
fn test_notes_through_commands() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ideas.txt");
    let mut app = app();
    type_command(&mut app, &format!(":notefile idea {}", target.display()));
    type_command(&mut app, ":note idea reread the intro");
    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        "reread the intro\n"
    );
}

#[test]
fn test_app_get_render_state_returns_correct_initial_state() {
    let app = app();
    let state = app.get_render_state();
    assert_eq!(state.mode, AppMode::Command);
    assert!(state.tokens.is_empty());
}
