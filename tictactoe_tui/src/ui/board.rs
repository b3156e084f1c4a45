//! Board rendering.

use crate::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tictactoe_replay::{GameStatus, Mark, Position, Square};

/// Renders the 3x3 grid.
///
/// Winning cells get a distinct background restricted to the actual
/// winning triple; a drawn board gets a dim whole-board tint; the
/// selected cell is reversed while the board has focus.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, 6);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], app, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], app, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], app, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let game = app.game();
    let square = game.current_board().get(index).unwrap_or(Square::Empty);

    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if let Some(pos) = Position::from_index(index) {
        if game.is_winning_cell(pos) {
            style = style.bg(Color::LightBlue).fg(Color::Black);
        } else if game.status() == GameStatus::Draw {
            style = style.bg(Color::DarkGray).fg(Color::Black);
        }
    }

    if app.focus() == Focus::Board && app.selected_cell() == index {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
