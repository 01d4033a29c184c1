use anyhow::Result;
use snag::app::App;
use snag::engine::Config;
use snag::notes::NoteBook;
use snag::ui::{Theme, TuiManager};

fn main() -> Result<()> {
    snag::logging::init();

    let config = Config::load();
    let notes = open_notes(&config);
    let theme = Theme::from_config(&config.theme);

    let mut app = App::new(config, notes);
    let mut tui = TuiManager::new(theme)?;

    // The TUI handles all input, including document loading commands
    tui.run_event_loop(&mut app)?;

    Ok(())
}

fn open_notes(config: &Config) -> NoteBook {
    let Some(store) = config.notes_store() else {
        return NoteBook::in_memory();
    };
    NoteBook::open(&store).unwrap_or_else(|e| {
        tracing::warn!(store = %store.display(), error = %e, "could not open note store");
        NoteBook::in_memory()
    })
}
