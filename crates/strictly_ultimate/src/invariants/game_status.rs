//! Game status invariant: the game status agrees with the meta-board.

use super::super::rules::{all_decided, detect_outcome, has_line};
use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: The game status is justified by the sub-board statuses.
///
/// - `InProgress`: no meta line and at least one open sub-board.
/// - `Won(p)`: `p` owns a meta line.
/// - `Drawn`: every sub-board decided and no meta line.
pub struct GameStatusInvariant;

impl Invariant<GameState> for GameStatusInvariant {
    fn holds(state: &GameState) -> bool {
        let statuses = state.statuses();
        match state.status() {
            GameStatus::InProgress => {
                detect_outcome(statuses).is_none() && !all_decided(statuses)
            }
            GameStatus::Won(player) => has_line(statuses, player),
            GameStatus::Drawn => all_decided(statuses) && detect_outcome(statuses).is_none(),
        }
    }

    fn description() -> &'static str {
        "Game status matches the meta-board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActiveField, Board, Player, RuleSettings, SubBoardStatus};

    fn with_statuses(statuses: [SubBoardStatus; 9], status: GameStatus) -> GameState {
        GameState::from_parts(
            RuleSettings::default(),
            Board::new(),
            statuses,
            ActiveField::Any,
            Player::X,
            status,
        )
    }

    #[test]
    fn test_new_game_holds() {
        assert!(GameStatusInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_missed_meta_win_violates() {
        let mut statuses = [SubBoardStatus::Open; 9];
        for i in [0, 4, 8] {
            statuses[i] = SubBoardStatus::Won(Player::X);
        }
        assert!(!GameStatusInvariant::holds(&with_statuses(statuses, GameStatus::InProgress)));
        assert!(GameStatusInvariant::holds(&with_statuses(statuses, GameStatus::Won(Player::X))));
    }

    #[test]
    fn test_draw_requires_every_sub_board_decided() {
        let mut statuses = [SubBoardStatus::Drawn; 9];
        assert!(GameStatusInvariant::holds(&with_statuses(statuses, GameStatus::Drawn)));

        statuses[3] = SubBoardStatus::Open;
        assert!(!GameStatusInvariant::holds(&with_statuses(statuses, GameStatus::Drawn)));
    }
}
