//! Frozen status invariant: cached sub-board statuses agree with the marks.

use super::super::rules::{detect_outcome, has_line};
use super::super::{GameState, SubBoardStatus};
use super::Invariant;

/// Invariant: Every cached sub-board status is justified by its marks.
///
/// - `Open`: no line and at least one empty spot.
/// - `Won(p)`: `p` owns a line (later marks may add more lines; the status stays).
/// - `Drawn`: full with no line.
pub struct FrozenStatusInvariant;

impl Invariant<GameState> for FrozenStatusInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .board()
            .sub_boards()
            .iter()
            .zip(state.statuses())
            .all(|(sub, status)| match *status {
                SubBoardStatus::Open => sub.evaluate().is_open(),
                SubBoardStatus::Won(player) => has_line(sub.marks(), player),
                SubBoardStatus::Drawn => sub.is_full() && detect_outcome(sub.marks()).is_none(),
            })
    }

    fn description() -> &'static str {
        "Sub-board statuses match their marks and stay frozen once decided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ActiveField, Board, GameStatus, Mark, Player, RuleSettings, SubBoard,
    };

    fn state_with(sub: SubBoard, status: SubBoardStatus) -> GameState {
        let mut fields = [SubBoard::new(); 9];
        fields[0] = sub;
        let mut statuses = [SubBoardStatus::Open; 9];
        statuses[0] = status;
        GameState::from_parts(
            RuleSettings::default(),
            Board::from_fields(fields),
            statuses,
            ActiveField::Any,
            Player::X,
            GameStatus::InProgress,
        )
    }

    #[test]
    fn test_new_game_holds() {
        assert!(FrozenStatusInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_undetected_win_violates() {
        use Mark::{Empty, X};
        let sub = SubBoard::from_marks([X, X, X, Empty, Empty, Empty, Empty, Empty, Empty]);
        assert!(!FrozenStatusInvariant::holds(&state_with(sub, SubBoardStatus::Open)));
        assert!(FrozenStatusInvariant::holds(&state_with(sub, SubBoardStatus::Won(Player::X))));
        assert!(!FrozenStatusInvariant::holds(&state_with(sub, SubBoardStatus::Won(Player::O))));
    }

    #[test]
    fn test_won_status_survives_later_lines() {
        use Mark::{Empty, O, X};
        let sub = SubBoard::from_marks([O, O, O, X, X, X, Empty, Empty, Empty]);
        assert!(FrozenStatusInvariant::holds(&state_with(sub, SubBoardStatus::Won(Player::X))));
    }

    #[test]
    fn test_premature_draw_violates() {
        assert!(!FrozenStatusInvariant::holds(&state_with(
            SubBoard::new(),
            SubBoardStatus::Drawn
        )));
    }
}
