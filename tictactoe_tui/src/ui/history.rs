//! Move-history list rendering.

use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Renders the move list.
///
/// The step at the cursor is bold; the row under the list selection is
/// highlighted while the panel has focus. Each row pairs the jump label
/// with the board location of that move.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let rows = app.game().history_rows();

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let text = if row.location.is_empty() {
                row.label.clone()
            } else {
                format!("{}  ({})", row.label, row.location)
            };
            let style = if row.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::styled(text, style))
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected_step()));
    }
    f.render_stateful_widget(list, area, &mut state);
}
