//! Tic-tac-toe with move history and time travel.
//!
//! The crate splits into a pure rules engine and a replay kernel:
//!
//! - **rules**: winner, draw, and winning-triple detection over a
//!   single board snapshot.
//! - **history**: the [`Replay`] state, an append-only-until-truncated
//!   list of board snapshots with a cursor. Playing from a rewound
//!   position discards the abandoned future; jumping only moves the
//!   cursor.
//!
//! Illegal input (occupied cell, play after a win, jump out of range)
//! is a silent no-op at the [`Replay::dispatch`] surface, matching the
//! game's click-and-nothing-happens UX. The fallible `try_*` methods
//! expose the rejection reason for tests and logging.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{Action, GameStatus, Mark, Position, Replay};
//!
//! let mut game = Replay::new();
//! game.dispatch(Action::Play(Position::MiddleCenter));
//! game.dispatch(Action::Play(Position::TopLeft));
//! assert_eq!(game.status(), GameStatus::NextTurn(Mark::X));
//!
//! // Rewind one step; the move list still shows both moves.
//! game.dispatch(Action::JumpTo(1));
//! assert_eq!(game.history_rows().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Action, MoveError};
pub use history::{HistoryEntry, HistoryRow, Replay};
pub use position::Position;
pub use types::{Board, GameStatus, Mark, Square};
