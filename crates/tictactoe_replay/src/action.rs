//! First-class action types for the replay kernel.
//!
//! User interactions are domain events, not side effects. The UI maps
//! input to an [`Action`] and dispatches it; the kernel decides whether
//! anything changes.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// An input event for the replay reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark at a position.
    Play(Position),
    /// Move the cursor to a prior (or the latest) history step.
    JumpTo(usize),
    /// Discard the session and start over.
    Restart,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "play {}", pos.label()),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
            Action::Restart => write!(f, "restart"),
        }
    }
}

/// Classification of a rejected action.
///
/// The reducer surface swallows these (illegal input is a silent no-op,
/// matching the game's UX); the fallible methods expose them for tests
/// and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("game is already won")]
    GameOver,

    /// The requested history step does not exist.
    #[display("step {} is out of range", _0)]
    StepOutOfRange(usize),
}

impl std::error::Error for MoveError {}
