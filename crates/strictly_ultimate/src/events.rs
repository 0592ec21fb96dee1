//! Move results and the events a presentation layer reacts to.

use super::{ActiveField, Move, Outcome, Player, Position, SubBoardStatus};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Something that was decided by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GameEvent {
    /// A sub-board left `Open`.
    SubBoardDecided {
        /// The decided sub-board.
        field: Position,
        /// Its new (frozen) status.
        status: SubBoardStatus,
    },
    /// The game ended.
    GameDecided(Outcome),
}

/// Receives game events as moves are applied.
///
/// Observers are notified synchronously, in subscription order, after the
/// move has been fully applied.
pub trait GameObserver {
    /// Called once per event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// A sub-board decided by the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubBoardDecision {
    /// The decided sub-board.
    pub field: Position,
    /// Its new status (never `Open`).
    pub status: SubBoardStatus,
}

/// Whose turn it is and where they must play, after a move that did not end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NextTurn {
    /// Player to move.
    pub player: Player,
    /// Sub-board constraint for that move.
    pub active_field: ActiveField,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct MoveOutcome {
    /// The placed mark.
    applied: Move,
    /// Sub-board decided by this move, if any.
    decided: Option<SubBoardDecision>,
    /// Terminal outcome, if this move ended the game.
    outcome: Option<Outcome>,
    /// Next turn, if the game continues.
    next: Option<NextTurn>,
}

impl MoveOutcome {
    /// Outcome of a move after which play continues.
    pub(crate) fn continuing(
        applied: Move,
        decided: Option<SubBoardDecision>,
        next: NextTurn,
    ) -> Self {
        Self {
            applied,
            decided,
            outcome: None,
            next: Some(next),
        }
    }

    /// Outcome of a move that ended the game.
    pub(crate) fn finished(
        applied: Move,
        decided: Option<SubBoardDecision>,
        outcome: Outcome,
    ) -> Self {
        Self {
            applied,
            decided,
            outcome: Some(outcome),
            next: None,
        }
    }

    /// Returns true if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Events produced by this move, in emission order.
    pub fn events(&self) -> Vec<GameEvent> {
        let decided = self.decided.map(|d| GameEvent::SubBoardDecided {
            field: d.field,
            status: d.status,
        });
        let finished = self.outcome.map(GameEvent::GameDecided);
        decided.into_iter().chain(finished).collect()
    }
}
