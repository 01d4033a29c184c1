use crate::app::{App, AppMode};
use crate::ui::keys::key_to_event;
use crate::ui::reader::view::{
    layout_document, render_command_deck, render_document, render_placeholder, render_status,
    render_summary,
};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crossterm::event::{self, Event};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new(theme: Theme) -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme,
            _guard: guard,
        })
    }

    /// Draws, waits for a key, applies it; until the app quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let poll_timeout = Duration::from_millis(250);

        loop {
            self.render_frame(app)?;
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if event::poll(poll_timeout)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_event(key_to_event(app.mode(), key));
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        let theme = self.theme;

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());
            let main_area = chunks[0];

            match state.mode {
                AppMode::Summary => {
                    frame.render_widget(render_summary(&state, &theme), main_area);
                }
                _ if state.tokens.is_empty() => {
                    frame.render_widget(render_placeholder(&theme), main_area);
                }
                _ => {
                    let layout = layout_document(&state.tokens, main_area.width, &theme);
                    frame.render_widget(
                        render_document(layout, main_area.height, &theme),
                        main_area,
                    );
                }
            }

            frame.render_widget(render_status(&state, &theme), chunks[1]);
            frame.render_widget(render_command_deck(&state, &theme), chunks[2]);
        })?;

        Ok(())
    }
}
