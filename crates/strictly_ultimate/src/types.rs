//! Core domain types for ultimate tic-tac-toe.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on a spot.
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Content of a single spot inside a sub-board.
///
/// A spot starts `Empty` and, once marked, keeps that mark for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Mark {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by player X.
    X,
    /// Marked by player O.
    O,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// Checks if the spot is unmarked.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// Cached result for one sub-board.
///
/// Leaves `Open` exactly once, when the sub-board is won or filled, and is frozen afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum SubBoardStatus {
    /// Still undecided.
    #[default]
    Open,
    /// Won by a player with three in a row.
    Won(Player),
    /// Filled without a winner.
    Drawn,
}

impl SubBoardStatus {
    /// Returns true while the sub-board is undecided.
    pub fn is_open(self) -> bool {
        self == SubBoardStatus::Open
    }

    /// Returns true once the sub-board is won or drawn.
    pub fn is_decided(self) -> bool {
        !self.is_open()
    }

    /// Returns the winner of the sub-board, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            SubBoardStatus::Won(player) => Some(player),
            SubBoardStatus::Open | SubBoardStatus::Drawn => None,
        }
    }
}

impl std::fmt::Display for SubBoardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubBoardStatus::Open => write!(f, "open"),
            SubBoardStatus::Won(player) => write!(f, "won by {}", player),
            SubBoardStatus::Drawn => write!(f, "drawn"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win on the meta-board.
    Won(Player),
    /// Every sub-board is decided and nobody owns a meta line.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has been decided.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the terminal outcome, if the game is decided.
    pub fn outcome(self) -> Option<super::Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(super::Outcome::Winner(player)),
            GameStatus::Drawn => Some(super::Outcome::Draw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn test_mark_owner() {
        assert_eq!(Mark::Empty.owner(), None);
        assert_eq!(Mark::from(Player::O).owner(), Some(Player::O));
        assert!(Mark::default().is_empty());
    }

    #[test]
    fn test_status_helpers() {
        assert!(SubBoardStatus::Open.is_open());
        assert!(SubBoardStatus::Drawn.is_decided());
        assert_eq!(SubBoardStatus::Won(Player::X).winner(), Some(Player::X));
        assert_eq!(SubBoardStatus::Drawn.winner(), None);
        assert_eq!(SubBoardStatus::Won(Player::O).to_string(), "won by O");
    }

    #[test]
    fn test_game_status_outcome() {
        assert_eq!(GameStatus::InProgress.outcome(), None);
        assert!(GameStatus::Drawn.is_over());
        assert_eq!(
            GameStatus::Won(Player::X).outcome(),
            Some(crate::Outcome::Winner(Player::X))
        );
    }
}
