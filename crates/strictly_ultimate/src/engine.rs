//! Ultimate tic-tac-toe game engine.
//!
//! [`GameEngine`] owns one game. Every mutation goes through
//! [`GameEngine::apply_move`]; everything else is a read-only query.

use super::action::{Move, MoveError, MoveRequest};
use super::contracts::{Contract, FieldIsPlayable, LegalMove, MoveContract};
use super::events::{GameObserver, MoveOutcome};
use super::{ActiveField, GameState, GameStatus, Mark, Player, Position, RuleSettings, SubBoardStatus};
use tracing::{debug, instrument, warn};

/// Ultimate tic-tac-toe game engine.
pub struct GameEngine {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameEngine {
    /// Creates a new game under the default rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_settings(RuleSettings::default())
    }

    /// Creates a new game under the given rules.
    #[instrument]
    pub fn with_settings(settings: RuleSettings) -> Self {
        Self {
            state: GameState::new(settings),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for sub-board and game decisions.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// Places the current player's mark at (`field`, `spot`).
    ///
    /// # Errors
    ///
    /// Checked in this order, the first failure is returned:
    /// - [`MoveError::GameOver`] if the game is decided
    /// - [`MoveError::InvalidIndex`] if an index is outside 0..=8
    /// - [`MoveError::CellOccupied`] if the spot is marked
    /// - [`MoveError::WrongField`] if the sub-board is not playable
    ///
    /// The state is unchanged after an error.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn apply_move(&mut self, field: usize, spot: usize) -> Result<MoveOutcome, MoveError> {
        let request = MoveRequest::new(field, spot);
        let mov = MoveContract::pre(&self.state, &request).inspect_err(|error| {
            warn!(%error, %request, "Move rejected");
        })?;

        let mut next = self.state;
        let outcome = next.apply(mov);

        // Postcondition: verify contract in debug builds before committing
        #[cfg(debug_assertions)]
        MoveContract::post(&self.state, &next).inspect_err(|error| {
            warn!(%error, %request, "Move broke an invariant");
        })?;

        self.state = next;
        debug!(applied = %mov, terminal = outcome.is_terminal(), "Move applied");

        for event in outcome.events() {
            for observer in &mut self.observers {
                observer.on_event(&event);
            }
        }

        Ok(outcome)
    }

    /// Returns the mark at (`field`, `spot`), or `None` for out-of-range indices.
    pub fn mark(&self, field: usize, spot: usize) -> Option<Mark> {
        let field = Position::from_index(field)?;
        let spot = Position::from_index(spot)?;
        Some(self.state.mark(field, spot))
    }

    /// Returns the status of sub-board `field`, or `None` for an out-of-range index.
    pub fn sub_board_status(&self, field: usize) -> Option<SubBoardStatus> {
        Position::from_index(field).map(|field| self.state.status_of(field))
    }

    /// Returns the sub-board the next move is constrained to.
    pub fn active_field(&self) -> ActiveField {
        self.state.active_field()
    }

    /// Returns the player to move.
    pub fn current_turn(&self) -> Player {
        self.state.turn()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the full state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns whether the next move may go into sub-board `field`.
    #[instrument(skip(self))]
    pub fn is_playable(&self, field: Position) -> bool {
        !self.state.status().is_over() && FieldIsPlayable::check(&self.state, field).is_ok()
    }

    /// Returns every move [`GameEngine::apply_move`] would accept right now.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        Position::ALL
            .iter()
            .flat_map(|field| {
                Position::ALL
                    .iter()
                    .map(move |spot| MoveRequest::new(field.to_index(), spot.to_index()))
            })
            .filter_map(|request| LegalMove::check(&self.state, &request).ok())
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_first_move_sets_active_field() {
        let mut engine = GameEngine::new();
        let outcome = engine.apply_move(4, 4).unwrap();

        assert_eq!(outcome.applied().player, Player::X);
        assert_eq!(engine.active_field(), ActiveField::Field(Position::Center));
        assert_eq!(engine.current_turn(), Player::O);
        assert_eq!(engine.mark(4, 4), Some(Mark::X));
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut engine = GameEngine::new();
        engine.apply_move(4, 4).unwrap();
        let before = *engine.state();

        assert!(matches!(engine.apply_move(0, 0), Err(MoveError::WrongField { .. })));
        assert!(matches!(engine.apply_move(4, 4), Err(MoveError::CellOccupied { .. })));
        assert!(matches!(engine.apply_move(4, 9), Err(MoveError::InvalidIndex { .. })));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_out_of_range_queries() {
        let engine = GameEngine::new();
        assert_eq!(engine.mark(9, 0), None);
        assert_eq!(engine.sub_board_status(9), None);
        assert_eq!(engine.sub_board_status(8), Some(SubBoardStatus::Open));
    }

    #[test]
    fn test_legal_moves_follow_active_field() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.legal_moves().len(), 81);

        engine.apply_move(0, 4).unwrap();
        let legal = engine.legal_moves();
        assert_eq!(legal.len(), 9);
        assert!(legal.iter().all(|m| m.field == Position::Center && m.player == Player::O));
        assert!(engine.is_playable(Position::Center));
        assert!(!engine.is_playable(Position::TopLeft));
    }

    #[test]
    fn test_observer_sees_sub_board_decision() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut engine = GameEngine::new();
        engine.subscribe(move |event: &GameEvent| sink.borrow_mut().push(*event));

        // X collects spots 0, 1, 2 of sub-board 0; O keeps sending X back there.
        for (field, spot) in [(4, 4), (4, 0), (0, 0), (0, 4), (4, 8), (8, 0), (0, 1), (1, 0)] {
            engine.apply_move(field, spot).unwrap();
        }
        assert!(seen.borrow().is_empty());

        let outcome = engine.apply_move(0, 2).unwrap();
        let decided = GameEvent::SubBoardDecided {
            field: Position::TopLeft,
            status: SubBoardStatus::Won(Player::X),
        };
        assert_eq!(outcome.events(), vec![decided]);
        assert_eq!(*seen.borrow(), vec![decided]);
        assert_eq!(engine.active_field(), ActiveField::Field(Position::TopRight));
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
}
