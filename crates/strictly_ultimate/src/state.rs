//! Complete game state and the unchecked move transition.

use super::events::{MoveOutcome, NextTurn, SubBoardDecision};
use super::rules::{all_decided, detect_outcome};
use super::{
    ActiveField, Board, GameStatus, Mark, Move, Outcome, Player, Position, RuleSettings,
    SubBoardStatus,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameState {
    /// Rules this game is played under.
    settings: RuleSettings,
    /// The meta-board.
    board: Board,
    /// Cached status per sub-board.
    statuses: [SubBoardStatus; 9],
    /// Constraint on the next move.
    active_field: ActiveField,
    /// Player to move (the last mover once the game is over).
    turn: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a fresh game under the given rules.
    #[instrument]
    pub fn new(settings: RuleSettings) -> Self {
        Self {
            settings,
            board: Board::new(),
            statuses: [SubBoardStatus::Open; 9],
            active_field: ActiveField::Any,
            turn: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Assembles a state from raw parts without validation.
    ///
    /// Used to build positions for analysis and verification; check the
    /// result with the invariant set before trusting it.
    pub fn from_parts(
        settings: RuleSettings,
        board: Board,
        statuses: [SubBoardStatus; 9],
        active_field: ActiveField,
        turn: Player,
        status: GameStatus,
    ) -> Self {
        Self {
            settings,
            board,
            statuses,
            active_field,
            turn,
            status,
        }
    }

    /// Returns the rule settings.
    pub fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark at (`field`, `spot`).
    pub fn mark(&self, field: Position, spot: Position) -> Mark {
        self.board.mark(field, spot)
    }

    /// Returns all sub-board statuses.
    pub fn statuses(&self) -> &[SubBoardStatus; 9] {
        &self.statuses
    }

    /// Returns the status of one sub-board.
    pub fn status_of(&self, field: Position) -> SubBoardStatus {
        self.statuses[field.to_index()]
    }

    /// Returns the active field.
    pub fn active_field(&self) -> ActiveField {
        self.active_field
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies a validated move (unchecked - use `GameEngine::apply_move`).
    ///
    /// Order of effects: place the mark, decide the sub-board, decide the
    /// game, then derive the next active field and flip the turn.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub(crate) fn apply(&mut self, mov: Move) -> MoveOutcome {
        self.board.place(mov.field, mov.spot, mov.player);

        let decided = self.decide_sub_board(mov.field);

        if let Some(winner) = detect_outcome(&self.statuses) {
            info!(%winner, "Game won");
            self.status = GameStatus::Won(winner);
            return MoveOutcome::finished(mov, decided, Outcome::Winner(winner));
        }

        if all_decided(&self.statuses) {
            info!("Game drawn");
            self.status = GameStatus::Drawn;
            return MoveOutcome::finished(mov, decided, Outcome::Draw);
        }

        self.active_field = if self.status_of(mov.spot).is_open() {
            ActiveField::Field(mov.spot)
        } else {
            ActiveField::Any
        };
        self.turn = self.turn.opponent();
        debug!(active_field = %self.active_field, turn = %self.turn, "Turn passed");

        MoveOutcome::continuing(
            mov,
            decided,
            NextTurn {
                player: self.turn,
                active_field: self.active_field,
            },
        )
    }

    /// Re-judges an open sub-board after a mark lands in it.
    ///
    /// A decided sub-board is never re-evaluated.
    fn decide_sub_board(&mut self, field: Position) -> Option<SubBoardDecision> {
        if self.status_of(field).is_decided() {
            return None;
        }

        let status = self.board.sub_board(field).evaluate();
        if status.is_open() {
            return None;
        }

        info!(field = field.to_index(), %status, "Sub-board decided");
        self.statuses[field.to_index()] = status;
        Some(SubBoardDecision { field, status })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RuleSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::default();
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.active_field(), ActiveField::Any);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.statuses().iter().all(|s| s.is_open()));
        assert_eq!(state.board().count(Player::X), 0);
    }

    #[test]
    fn test_apply_sends_opponent_to_spot() {
        let mut state = GameState::default();
        let outcome = state.apply(Move::new(Player::X, Position::TopLeft, Position::Center));

        assert_eq!(state.mark(Position::TopLeft, Position::Center), Mark::X);
        assert_eq!(state.active_field(), ActiveField::Field(Position::Center));
        assert_eq!(state.turn(), Player::O);
        assert_eq!(
            outcome.next(),
            &Some(NextTurn {
                player: Player::O,
                active_field: ActiveField::Field(Position::Center),
            })
        );
    }

    #[test]
    fn test_apply_frees_choice_when_target_decided() {
        let mut statuses = [SubBoardStatus::Open; 9];
        statuses[Position::Center.to_index()] = SubBoardStatus::Drawn;
        let mut state = GameState::from_parts(
            RuleSettings::default(),
            Board::new(),
            statuses,
            ActiveField::Any,
            Player::X,
            GameStatus::InProgress,
        );

        state.apply(Move::new(Player::X, Position::TopLeft, Position::Center));
        assert_eq!(state.active_field(), ActiveField::Any);
    }
}
