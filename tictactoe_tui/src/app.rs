//! Application state and input handling.

use crossterm::event::KeyCode;
use tictactoe_replay::{Action, GameStatus, Position, Replay};
use tracing::debug;

/// Which panel receives directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The 3x3 grid.
    Board,
    /// The move-history list.
    History,
}

/// Main application state.
///
/// Owns the replay kernel plus pure view state: focus and the two
/// selections. All game semantics live behind `dispatch`; the app only
/// translates keys into actions.
pub struct App {
    game: Replay,
    focus: Focus,
    selected_cell: usize,
    selected_step: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Replay::new(),
            focus: Focus::Board,
            selected_cell: 4,
            selected_step: 0,
        }
    }

    /// The game being displayed.
    pub fn game(&self) -> &Replay {
        &self.game
    }

    /// The focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The cell the board selection sits on (0-8).
    pub fn selected_cell(&self) -> usize {
        self.selected_cell
    }

    /// The highlighted row of the history list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Status line text, winner first, then draw, then next turn.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(mark) => format!("Winner: {}", mark),
            GameStatus::Draw => "Cat's game: it's a draw".to_string(),
            GameStatus::NextTurn(mark) => format!("Next player: {}", mark),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char('r') => self.dispatch(Action::Restart),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.selected_cell = index;
                self.play(index);
            }
            KeyCode::Up => self.move_selection(0, -1),
            KeyCode::Down => self.move_selection(0, 1),
            KeyCode::Left => self.move_selection(-1, 0),
            KeyCode::Right => self.move_selection(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.selected_cell),
                Focus::History => self.dispatch(Action::JumpTo(self.selected_step)),
            },
            _ => {}
        }
    }

    fn play(&mut self, index: usize) {
        if let Some(pos) = Position::from_index(index) {
            self.dispatch(Action::Play(pos));
        }
    }

    fn dispatch(&mut self, action: Action) {
        debug!(%action, "dispatching");
        self.game.dispatch(action);
        // A play from a rewound position may have truncated the list.
        self.selected_step = self.selected_step.min(self.game.len() - 1);
    }

    fn move_selection(&mut self, dx: i32, dy: i32) {
        match self.focus {
            Focus::Board => {
                let col = (self.selected_cell % 3) as i32 + dx;
                let row = (self.selected_cell / 3) as i32 + dy;
                if (0..3).contains(&col) && (0..3).contains(&row) {
                    self.selected_cell = (row * 3 + col) as usize;
                }
            }
            Focus::History => {
                let step = self.selected_step as i32 + dy;
                if (0..self.game.len() as i32).contains(&step) {
                    self.selected_step = step as usize;
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_replay::Mark;

    #[test]
    fn test_digit_key_plays_cell() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().len(), 2);
        assert_eq!(app.game().status(), GameStatus::NextTurn(Mark::O));
    }

    #[test]
    fn test_occupied_cell_key_is_noop() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().len(), 2);
    }

    #[test]
    fn test_arrow_selection_stays_on_grid() {
        let mut app = App::new();
        assert_eq!(app.selected_cell(), 4);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_cell(), 1);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_cell(), 1);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.selected_cell(), 0);
    }

    #[test]
    fn test_enter_on_history_jumps() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().cursor(), 1);
        // Jumping leaves the list intact.
        assert_eq!(app.game().len(), 3);
    }

    #[test]
    fn test_selection_clamped_after_truncation() {
        let mut app = App::new();
        for key in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Tab);
        for _ in 0..3 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.selected_step(), 3);

        // Rewind to move 1 and branch: steps 2-3 disappear.
        app.game.dispatch(Action::JumpTo(1));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.game().len(), 3);
        assert!(app.selected_step() < app.game().len());
    }

    #[test]
    fn test_restart_key_resets() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().len(), 1);
        assert_eq!(app.status_line(), "Next player: X");
    }
}
