//! A single 3x3 sub-board.

use super::rules::{detect_outcome, is_full};
use super::{Mark, Player, Position, SubBoardStatus};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the nine small boards of the meta-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SubBoard {
    /// Marks in row-major order (0-8).
    marks: [Mark; 9],
}

impl SubBoard {
    /// Creates an empty sub-board.
    pub fn new() -> Self {
        Self {
            marks: [Mark::Empty; 9],
        }
    }

    /// Creates a sub-board from its marks.
    pub fn from_marks(marks: [Mark; 9]) -> Self {
        Self { marks }
    }

    /// Gets the mark at the given spot.
    pub fn get(&self, spot: Position) -> Mark {
        self.marks[spot.to_index()]
    }

    /// Returns all marks.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// Checks if a spot is unmarked.
    pub fn is_empty(&self, spot: Position) -> bool {
        self.get(spot).is_empty()
    }

    /// Checks if every spot is marked.
    pub fn is_full(&self) -> bool {
        is_full(&self.marks)
    }

    /// Number of spots marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.marks.iter().filter(|m| m.owner() == Some(player)).count()
    }

    /// Judges the sub-board from its marks alone.
    ///
    /// A line wins; otherwise a full sub-board is drawn.
    pub fn evaluate(&self) -> SubBoardStatus {
        if let Some(winner) = detect_outcome(&self.marks) {
            SubBoardStatus::Won(winner)
        } else if self.is_full() {
            SubBoardStatus::Drawn
        } else {
            SubBoardStatus::Open
        }
    }

    /// Marks a spot (unchecked - the engine validates the move first).
    pub(crate) fn place(&mut self, spot: Position, player: Player) {
        debug_assert!(self.is_empty(spot), "spot {spot} is already marked");
        self.marks[spot.to_index()] = player.mark();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sub_board_is_open() {
        let sub = SubBoard::new();
        assert!(sub.is_empty(Position::Center));
        assert_eq!(sub.evaluate(), SubBoardStatus::Open);
    }

    #[test]
    fn test_evaluate_win() {
        let mut sub = SubBoard::new();
        sub.place(Position::TopLeft, Player::O);
        sub.place(Position::Center, Player::O);
        sub.place(Position::BottomRight, Player::O);
        assert_eq!(sub.evaluate(), SubBoardStatus::Won(Player::O));
        assert_eq!(sub.count(Player::O), 3);
        assert_eq!(sub.count(Player::X), 0);
    }

    #[test]
    fn test_evaluate_draw() {
        use Mark::{O, X};
        let sub = SubBoard::from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(sub.evaluate(), SubBoardStatus::Drawn);
    }
}
