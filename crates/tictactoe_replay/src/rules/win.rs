//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning triples, enumerated rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopMiddle, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::MiddleCenter,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopMiddle,
        Position::MiddleCenter,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [
        Position::TopLeft,
        Position::MiddleCenter,
        Position::BottomRight,
    ],
    [
        Position::TopRight,
        Position::MiddleCenter,
        Position::BottomLeft,
    ],
];

fn mark_at(board: &Board, pos: Position) -> Option<Mark> {
    match board.get(pos.to_index()) {
        Some(Square::Occupied(mark)) => Some(mark),
        _ => None,
    }
}

/// Finds the winning triple, if any.
///
/// Returns the winning mark together with the three positions that form
/// the line. A valid board has at most one winning mark; when a mark
/// owns two lines at once (possible on a full board) the first triple
/// in [`WINNING_LINES`] order is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    for line @ [a, b, c] in WINNING_LINES {
        if let Some(mark) = mark_at(board, a) {
            if mark_at(board, b) == Some(mark) && mark_at(board, c) == Some(mark) {
                return Some((mark, line));
            }
        }
    }
    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark occupies a full triple,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Checks whether a cell belongs to the actual winning triple.
///
/// False whenever the board has no winner. Only the three cells of the
/// matching line count; the rest of the board is never flagged.
#[instrument(skip(board))]
pub fn is_winning_cell(board: &Board, pos: Position) -> bool {
    match winning_line(board) {
        Some((_, line)) => line.contains(&pos),
        None => false,
    }
}
