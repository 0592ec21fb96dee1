//! Active field invariant: the constraint always names an open sub-board.

use super::super::{ActiveField, GameState};
use super::Invariant;

/// Invariant: While the game runs, `ActiveField::Field(i)` implies sub-board `i` is open.
///
/// After the deciding move the active field is left as it was, so finished
/// games are exempt.
pub struct ActiveFieldInvariant;

impl Invariant<GameState> for ActiveFieldInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status().is_over() {
            return true;
        }

        match state.active_field() {
            ActiveField::Any => true,
            ActiveField::Field(field) => state.status_of(field).is_open(),
        }
    }

    fn description() -> &'static str {
        "Active field names an open sub-board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameStatus, Player, Position, RuleSettings, SubBoardStatus};

    #[test]
    fn test_new_game_holds() {
        assert!(ActiveFieldInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_decided_target_violates() {
        let mut statuses = [SubBoardStatus::Open; 9];
        statuses[Position::Center.to_index()] = SubBoardStatus::Drawn;
        let build = |status| {
            GameState::from_parts(
                RuleSettings::default(),
                Board::new(),
                statuses,
                ActiveField::Field(Position::Center),
                Player::X,
                status,
            )
        };

        assert!(!ActiveFieldInvariant::holds(&build(GameStatus::InProgress)));
        assert!(ActiveFieldInvariant::holds(&build(GameStatus::Drawn)));
    }
}
