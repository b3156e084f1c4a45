//! Pure rules over a board snapshot.
//!
//! Nothing in here touches the history kernel; every function takes a
//! board and derives a fact from it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, is_winning_cell, winning_line, WINNING_LINES};
