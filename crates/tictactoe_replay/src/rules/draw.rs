//! Draw detection logic.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks for a draw: board full with no winner.
///
/// A full board with a winning triple is a win, never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Square};

    fn place(board: &mut Board, pos: Position, mark: Mark) {
        board
            .set(pos.to_index(), Square::Occupied(mark))
            .unwrap();
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        place(&mut board, Position::MiddleCenter, Mark::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O - full, no triple.
        place(&mut board, Position::TopLeft, Mark::X);
        place(&mut board, Position::TopMiddle, Mark::O);
        place(&mut board, Position::TopRight, Mark::X);
        place(&mut board, Position::MiddleLeft, Mark::O);
        place(&mut board, Position::MiddleCenter, Mark::X);
        place(&mut board, Position::MiddleRight, Mark::X);
        place(&mut board, Position::BottomLeft, Mark::O);
        place(&mut board, Position::BottomCenter, Mark::X);
        place(&mut board, Position::BottomRight, Mark::O);

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_not_draw() {
        let mut board = Board::new();
        // X X X / O O X / O X O - full, X wins the top row.
        place(&mut board, Position::TopLeft, Mark::X);
        place(&mut board, Position::TopMiddle, Mark::X);
        place(&mut board, Position::TopRight, Mark::X);
        place(&mut board, Position::MiddleLeft, Mark::O);
        place(&mut board, Position::MiddleCenter, Mark::O);
        place(&mut board, Position::MiddleRight, Mark::X);
        place(&mut board, Position::BottomLeft, Mark::O);
        place(&mut board, Position::BottomCenter, Mark::X);
        place(&mut board, Position::BottomRight, Mark::O);

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
