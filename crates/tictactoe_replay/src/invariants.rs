//! First-class invariants for the replay kernel.
//!
//! Invariants are logical properties that must hold throughout a
//! session. They are testable independently and double as documentation
//! of what the kernel guarantees; `dispatch` checks them in debug
//! builds after every action.

use crate::history::Replay;
use crate::types::{Board, Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) when every invariant holds, or the list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: history starts with the untouched seed entry.
///
/// Entry 0 is always the empty board with no changed cell, for the
/// whole life of the session.
pub struct HistorySeededInvariant;

impl Invariant<Replay> for HistorySeededInvariant {
    fn holds(replay: &Replay) -> bool {
        match replay.history().first() {
            Some(entry) => entry.changed().is_none() && *entry.board() == Board::new(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with an empty board and no recorded move"
    }
}

/// Invariant: each step changes exactly its recorded cell.
///
/// Consecutive snapshots differ in one square, the one the entry names,
/// and that square goes from empty to occupied.
pub struct SingleCellStepInvariant;

impl Invariant<Replay> for SingleCellStepInvariant {
    fn holds(replay: &Replay) -> bool {
        for window in replay.history().windows(2) {
            let (prev, next) = (&window[0], &window[1]);
            let Some(changed) = next.changed() else {
                return false;
            };
            let changed = changed.to_index();

            for index in 0..9 {
                let before = prev.board().get(index);
                let after = next.board().get(index);
                if index == changed {
                    let empty_to_mark = matches!(before, Some(Square::Empty))
                        && matches!(after, Some(Square::Occupied(_)));
                    if !empty_to_mark {
                        return false;
                    }
                } else if before != after {
                    return false;
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "Each history step fills exactly the cell it records"
    }
}

/// Invariant: recorded moves alternate X, O, X, O, ...
pub struct AlternatingMarkInvariant;

impl Invariant<Replay> for AlternatingMarkInvariant {
    fn holds(replay: &Replay) -> bool {
        for (step, entry) in replay.history().iter().enumerate().skip(1) {
            let expected = if step % 2 == 1 { Mark::X } else { Mark::O };
            let Some(changed) = entry.changed() else {
                return false;
            };
            match entry.board().get(changed.to_index()) {
                Some(Square::Occupied(mark)) if mark == expected => {}
                _ => return false,
            }
        }
        true
    }

    fn description() -> &'static str {
        "Recorded moves alternate marks starting with X"
    }
}

/// Invariant: the cursor always names an existing entry.
pub struct CursorInBoundsInvariant;

impl Invariant<Replay> for CursorInBoundsInvariant {
    fn holds(replay: &Replay) -> bool {
        replay.cursor() < replay.len()
    }

    fn description() -> &'static str {
        "Cursor stays within history bounds"
    }
}

/// All replay invariants as a composable set.
pub type ReplayInvariants = (
    HistorySeededInvariant,
    SingleCellStepInvariant,
    AlternatingMarkInvariant,
    CursorInBoundsInvariant,
);
