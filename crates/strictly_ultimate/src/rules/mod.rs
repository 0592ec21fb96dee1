//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions for evaluating a 3x3 grid. The same routines judge a
//! sub-board (over its marks) and the meta-board (over the sub-board
//! statuses).

pub mod draw;
pub mod win;

pub use draw::{all_decided, is_full};
pub use win::{LINES, LineCell, detect_outcome, has_line};
