//! Balanced marks invariant: one mark per turn, X first.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Mark counts agree with whose turn it is.
///
/// X moves first and turns alternate, so while the game is running X has
/// as many marks as O when X is to move, and one more when O is to move.
/// Once the game is over the turn no longer flips; the last mover is the
/// one holding the extra mark (or X and O are level if O moved last).
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);

        let x_has_extra = if state.status().is_over() {
            state.turn() == Player::X
        } else {
            state.turn() == Player::O
        };

        if x_has_extra { x == o + 1 } else { x == o }
    }

    fn description() -> &'static str {
        "Mark counts match alternating turns (X first)"
    }
}
