//! Draw detection for sub-boards and the meta-board.

use super::super::{Mark, SubBoardStatus};
use tracing::instrument;

/// Checks if every spot of a sub-board is marked.
///
/// A full sub-board with no winner is drawn.
#[instrument(skip(marks))]
pub fn is_full(marks: &[Mark; 9]) -> bool {
    marks.iter().all(|m| !m.is_empty())
}

/// Checks if every sub-board has been decided.
///
/// With no meta line owned, this is a drawn game.
#[instrument(skip(statuses))]
pub fn all_decided(statuses: &[SubBoardStatus; 9]) -> bool {
    statuses.iter().all(|s| s.is_decided())
}
