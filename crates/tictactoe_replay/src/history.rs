//! The replay kernel: board history, cursor, and time travel.

use crate::action::{Action, MoveError};
use crate::invariants::{InvariantSet, ReplayInvariants};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One step of game history: a board snapshot plus the cell that was
/// changed to produce it. The initial entry has no changed cell.
///
/// Entries are immutable once appended; time travel only moves the
/// cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    changed: Option<Position>,
}

impl HistoryEntry {
    /// The board snapshot at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell changed to produce this snapshot.
    pub fn changed(&self) -> Option<Position> {
        self.changed
    }
}

/// A row of the move list as the UI shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Step index into history.
    pub step: usize,
    /// "Go to game start" or "Go to move #N".
    pub label: String,
    /// Position label of the changed cell; empty for the initial entry.
    pub location: &'static str,
    /// True when this step is the one currently displayed.
    pub is_current: bool,
}

/// Game state with full move history and a replay cursor.
///
/// The history always starts with the empty board. Playing from a
/// rewound position truncates everything beyond the cursor before
/// appending, so the move list never shows an abandoned future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    history: Vec<HistoryEntry>,
    cursor: usize,
}

impl Replay {
    /// Creates a fresh session: one empty-board entry, cursor at 0.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                changed: None,
            }],
            cursor: 0,
        }
    }

    /// The step currently displayed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; history keeps its seed entry for the whole session.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// All history entries in order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The entry at the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.cursor]
    }

    /// The board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// The mark that moves next, derived from cursor parity.
    ///
    /// X plays on even steps, O on odd ones; rewinding the cursor
    /// rewinds the turn with it.
    pub fn next_mark(&self) -> Mark {
        if self.cursor % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Places the next mark at `pos`, or reports why it cannot.
    ///
    /// A legal play copies the displayed board, occupies the cell,
    /// drops every entry beyond the cursor, appends the new snapshot,
    /// and advances the cursor onto it.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] when the displayed board already has a
    /// winner, [`MoveError::SquareOccupied`] when the cell is taken.
    /// A drawn board rejects every play through the occupied-cell case.
    #[instrument(skip(self), fields(pos = %pos, mark = %self.next_mark()))]
    pub fn try_play(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = *self.current_board();

        if rules::check_winner(&board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos.to_index()) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = board;
        next.set(pos.to_index(), Square::Occupied(self.next_mark()))
            .expect("position index is always in bounds");

        self.history.truncate(self.cursor + 1);
        self.history.push(HistoryEntry {
            board: next,
            changed: Some(pos),
        });
        self.cursor = self.history.len() - 1;
        Ok(())
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// [`MoveError::StepOutOfRange`] when `step` does not name an
    /// existing entry (including steps discarded by truncation).
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange(step));
        }
        self.cursor = step;
        Ok(())
    }

    /// Applies an action, silently ignoring illegal ones.
    ///
    /// This is the reducer surface the UI drives: clicking an occupied
    /// cell, or any cell once the game is won, changes nothing.
    #[instrument(skip(self), fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) {
        let outcome = match action {
            Action::Play(pos) => self.try_play(pos),
            Action::JumpTo(step) => self.try_jump_to(step),
            Action::Restart => {
                *self = Self::new();
                Ok(())
            }
        };
        if let Err(reason) = outcome {
            debug!(%reason, "action ignored");
        }
        debug_assert!(
            ReplayInvariants::check_all(self).is_ok(),
            "replay invariant violated after {action}"
        );
    }

    /// Display status of the board at the cursor.
    ///
    /// Winner first, then draw, then whose turn is next.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextTurn(self.next_mark())
        }
    }

    /// True when `pos` belongs to the winning triple on the displayed
    /// board.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        rules::is_winning_cell(self.current_board(), pos)
    }

    /// The move list: one row per history entry.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, entry)| HistoryRow {
                step,
                label: if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                },
                location: entry.changed().map(|p| p.label()).unwrap_or(""),
                is_current: step == self.cursor,
            })
            .collect()
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new()
    }
}
