//! The 9x9 meta-board and the active-field constraint.

use super::{Mark, Player, Position, SubBoard};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Meta-board of nine sub-boards, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    fields: [SubBoard; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            fields: [SubBoard::new(); 9],
        }
    }

    /// Creates a board from its sub-boards.
    pub fn from_fields(fields: [SubBoard; 9]) -> Self {
        Self { fields }
    }

    /// Returns the sub-board at `field`.
    pub fn sub_board(&self, field: Position) -> &SubBoard {
        &self.fields[field.to_index()]
    }

    /// Returns all sub-boards.
    pub fn sub_boards(&self) -> &[SubBoard; 9] {
        &self.fields
    }

    /// Gets the mark at (`field`, `spot`).
    pub fn mark(&self, field: Position, spot: Position) -> Mark {
        self.sub_board(field).get(spot)
    }

    /// Number of spots marked by `player` across the whole board.
    pub fn count(&self, player: Player) -> usize {
        self.fields.iter().map(|sub| sub.count(player)).sum()
    }

    /// Marks a spot (unchecked).
    pub(crate) fn place(&mut self, field: Position, spot: Position, player: Player) {
        self.fields[field.to_index()].place(spot, player);
    }
}

/// The sub-board the next move is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum ActiveField {
    /// No constraint: any playable sub-board.
    #[default]
    Any,
    /// The next move must go into this sub-board.
    Field(Position),
}

impl ActiveField {
    /// Returns the constrained sub-board, if any.
    pub fn field(self) -> Option<Position> {
        match self {
            ActiveField::Any => None,
            ActiveField::Field(field) => Some(field),
        }
    }
}

impl std::fmt::Display for ActiveField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveField::Any => write!(f, "any"),
            ActiveField::Field(field) => write!(f, "{} ({})", field.to_index(), field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new();
        board.place(Position::Center, Position::TopRight, Player::X);
        assert_eq!(board.mark(Position::Center, Position::TopRight), Mark::X);
        assert_eq!(board.mark(Position::TopRight, Position::Center), Mark::Empty);
        assert_eq!(board.count(Player::X), 1);
        assert_eq!(board.count(Player::O), 0);
    }

    #[test]
    fn test_active_field_display() {
        assert_eq!(ActiveField::Any.to_string(), "any");
        assert_eq!(ActiveField::Field(Position::Center).to_string(), "4 (Center)");
        assert_eq!(ActiveField::Field(Position::TopLeft).field(), Some(Position::TopLeft));
    }
}
