//! Position enum for the nine board cells.

use serde::{Deserialize, Serialize};

/// A position on the board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-middle (index 1)
    TopMiddle,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Middle-center (index 4)
    MiddleCenter,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Display label for this position, as shown in the move list.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-Left",
            Position::TopMiddle => "Top-Middle",
            Position::TopRight => "Top-Right",
            Position::MiddleLeft => "Middle-Left",
            Position::MiddleCenter => "Middle-Center",
            Position::MiddleRight => "Middle-Right",
            Position::BottomLeft => "Bottom-Left",
            Position::BottomCenter => "Bottom-Center",
            Position::BottomRight => "Bottom-Right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopMiddle => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::MiddleCenter => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index; None when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopMiddle),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::MiddleCenter),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopMiddle,
        Position::TopRight,
        Position::MiddleLeft,
        Position::MiddleCenter,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
