//! First-class action types for ultimate tic-tac-toe.
//!
//! A [`MoveRequest`] is what a caller asks for: raw indices, possibly out of
//! range. A [`Move`] is a request that passed every precondition, bound to
//! the player whose turn it was.

use super::{ActiveField, Player, Position};
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw move request: a sub-board index and a spot index, both expected in 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, new)]
pub struct MoveRequest {
    /// Sub-board index.
    pub field: usize,
    /// Spot index inside the sub-board.
    pub spot: usize,
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.field, self.spot)
    }
}

/// An accepted move: a player placing their mark at (field, spot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The sub-board receiving the mark.
    pub field: Position,
    /// The spot inside the sub-board.
    pub spot: Position,
}

impl Move {
    /// The raw indices of this move.
    pub fn request(&self) -> MoveRequest {
        MoveRequest::new(self.field.to_index(), self.spot.to_index())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> field {} / spot {}",
            self.player,
            self.field.to_index(),
            self.spot.to_index()
        )
    }
}

/// Error that can occur when validating or applying a move.
///
/// The engine state is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// A field or spot index is outside 0..=8.
    #[display("Index out of range: field {field}, spot {spot} (must be 0-8)")]
    InvalidIndex {
        /// Requested sub-board index.
        field: usize,
        /// Requested spot index.
        spot: usize,
    },

    /// The target spot is already marked.
    #[display("Spot {} in field {} is already occupied", spot.to_index(), field.to_index())]
    CellOccupied {
        /// Sub-board of the move.
        field: Position,
        /// Occupied spot.
        spot: Position,
    },

    /// The target sub-board is not playable under the active-field rule.
    #[display("Field {} is not playable (active field: {active})", field.to_index())]
    WrongField {
        /// Sub-board of the move.
        field: Position,
        /// Active field at the time of the move.
        active: ActiveField,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}
