use crate::app::{AppMode, Notice, NoticeLevel, PendingAction, RenderState, RenderToken};
use crate::reading::TokenKind;
use crate::report::{format_line, Group, Summary};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// The document wrapped to a width, with the row holding the cursor.
pub struct DocumentLayout {
    pub lines: Vec<Line<'static>>,
    pub cursor_row: usize,
}

/// Wraps visible tokens into lines no wider than `width` columns.
///
/// Newlines in whitespace runs start a new line; other whitespace is drawn as
/// spaces. Words are never split. Drawing stops at the first hidden token and
/// a marker line is added in its place.
pub fn layout_document(tokens: &[RenderToken], width: u16, theme: &Theme) -> DocumentLayout {
    let width = width.max(1) as usize;
    let text_style = Style::default().fg(theme.text);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut column = 0;
    let mut cursor_row = 0;
    let mut hidden = false;

    for token in tokens {
        if token.hidden {
            hidden = true;
            break;
        }
        match token.kind {
            TokenKind::Whitespace => {
                let mut pad = String::new();
                for ch in token.text.chars() {
                    match ch {
                        '\n' => {
                            if !pad.is_empty() {
                                current.push(Span::styled(std::mem::take(&mut pad), text_style));
                            }
                            lines.push(Line::from(std::mem::take(&mut current)));
                            column = 0;
                        }
                        '\r' => {}
                        _ if column > 0 && column < width => {
                            pad.push(' ');
                            column += 1;
                        }
                        _ => {}
                    }
                }
                if !pad.is_empty() {
                    current.push(Span::styled(pad, text_style));
                }
            }
            TokenKind::Word => {
                let word_width = token.text.width();
                if column > 0 && column + word_width > width {
                    lines.push(Line::from(std::mem::take(&mut current)));
                    column = 0;
                }
                if token.cursor {
                    cursor_row = lines.len();
                }
                current.push(Span::styled(token.text.clone(), word_style(token, theme)));
                column += word_width;
            }
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    if hidden {
        lines.push(Line::from(Span::styled(
            "… rest hidden (x to reveal)",
            Style::default()
                .fg(theme.dimmed)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    DocumentLayout { lines, cursor_row }
}

fn word_style(token: &RenderToken, theme: &Theme) -> Style {
    let mut style = Style::default().fg(theme.text);
    if token.marked {
        style = style
            .fg(theme.marked)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if token.cursor {
        style = style.bg(theme.cursor).fg(theme.background);
    }
    style
}

/// Scroll offset that keeps `cursor_row` in the middle of `height` rows.
pub fn scroll_offset(cursor_row: usize, height: u16) -> u16 {
    let half = (height as usize).saturating_sub(1) / 2;
    cursor_row.saturating_sub(half).min(u16::MAX as usize) as u16
}

pub fn render_document(layout: DocumentLayout, height: u16, theme: &Theme) -> Paragraph<'static> {
    let offset = scroll_offset(layout.cursor_row, height);
    Paragraph::new(layout.lines)
        .scroll((offset, 0))
        .style(Style::default().bg(theme.background))
}

pub fn summary_lines(groups: &[Group], summary: Summary, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Removed {} · Unique {}",
            summary.total_removed, summary.unique_groups
        ),
        Style::default().fg(theme.marked).add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(""));

    if groups.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing removed yet",
            Style::default().fg(theme.dimmed),
        )));
    }
    for (rank, group) in groups.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>3}. ", rank + 1),
                Style::default().fg(theme.dimmed),
            ),
            Span::styled(format_line(group), Style::default().fg(theme.text)),
        ]));
    }
    lines
}

pub fn render_summary(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(summary_lines(&state.groups, state.summary, theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Summary · e export · y copy · esc back ")
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.background))
}

/// Left: mode and counts. Right: the latest notice.
pub fn status_text(state: &RenderState) -> String {
    let mode = match state.mode {
        AppMode::Command => "COMMAND",
        AppMode::Reading => "READING",
        AppMode::Summary => "SUMMARY",
        AppMode::Confirm(_) => "CONFIRM",
        AppMode::Quit => "QUIT",
    };
    let (word, total) = state.progress;
    format!(
        " {} │ {}/{} │ marked {} │ removed {} │ unique {} │ hide {}",
        mode,
        word,
        total,
        state.marked_words,
        state.summary.total_removed,
        state.summary.unique_groups,
        if state.hide_enabled { "on" } else { "off" },
    )
}

pub fn render_status(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        status_text(state),
        Style::default().fg(theme.text),
    )];
    if let Some(source) = &state.source {
        spans.push(Span::styled(
            format!(" │ {}", source),
            Style::default().fg(theme.dimmed),
        ));
    }
    Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background))
}

/// Bottom line: command input, confirmation prompt or the current notice.
pub fn render_command_deck(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let line = match state.mode {
        AppMode::Command => Line::from(vec![
            Span::styled("▌", Style::default().fg(theme.marked)),
            Span::styled(
                format!("{}█", state.input),
                Style::default().fg(theme.text),
            ),
        ]),
        AppMode::Confirm(action) => Line::from(Span::styled(
            confirm_prompt(action, state),
            Style::default()
                .fg(theme.marked)
                .add_modifier(Modifier::BOLD),
        )),
        _ => notice_line(state.notice.as_ref(), theme),
    };
    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(Style::default().bg(theme.background))
}

fn confirm_prompt(action: PendingAction, state: &RenderState) -> String {
    match action {
        PendingAction::Remove => format!(
            "Remove {} marked words from the document? (y/n)",
            state.marked_words
        ),
        PendingAction::NewDocument => {
            "Discard this document and its history? (y/n)".to_string()
        }
    }
}

fn notice_line(notice: Option<&Notice>, theme: &Theme) -> Line<'static> {
    match notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => theme.dimmed,
                NoticeLevel::Warning => theme.marked,
            };
            Line::from(Span::styled(notice.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(""),
    }
}

pub fn render_placeholder(theme: &Theme) -> Paragraph<'static> {
    let text = "Type @filename to load a text or PDF file\n\
                @@ to load from the clipboard\n\
                :type <text> to read what you type\n\
                :q to quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}
