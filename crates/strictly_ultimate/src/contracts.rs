//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError, MoveRequest};
use super::invariants::{InvariantSet, UltimateInvariants};
use super::{ActiveField, GameState, Mark, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// What a satisfied precondition yields.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: Both indices must name a cell of a 3x3 grid.
pub struct IndicesInRange;

impl IndicesInRange {
    /// Converts the raw indices into positions.
    #[instrument]
    pub fn check(request: &MoveRequest) -> Result<(Position, Position), MoveError> {
        match (
            Position::from_index(request.field),
            Position::from_index(request.spot),
        ) {
            (Some(field), Some(spot)) => Ok((field, spot)),
            _ => Err(MoveError::InvalidIndex {
                field: request.field,
                spot: request.spot,
            }),
        }
    }
}

/// Precondition: The target spot must be empty.
pub struct SpotIsEmpty;

impl SpotIsEmpty {
    /// Checks that no mark sits at (`field`, `spot`).
    #[instrument(skip(state))]
    pub fn check(state: &GameState, field: Position, spot: Position) -> Result<(), MoveError> {
        if state.mark(field, spot) == Mark::Empty {
            Ok(())
        } else {
            Err(MoveError::CellOccupied { field, spot })
        }
    }
}

/// Precondition: The target sub-board must be playable.
///
/// A sub-board is admitted when the active field is `Any`, names it, or
/// names a decided sub-board. Under closed rules a decided target is
/// rejected regardless.
pub struct FieldIsPlayable;

impl FieldIsPlayable {
    /// Checks `field` against the active field and the rule settings.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, field: Position) -> Result<(), MoveError> {
        let active = state.active_field();
        let admitted = match active {
            ActiveField::Any => true,
            ActiveField::Field(target) => target == field || state.status_of(target).is_decided(),
        };
        let closed = *state.settings().closed_decided_boards() && state.status_of(field).is_decided();

        if admitted && !closed {
            Ok(())
        } else {
            Err(MoveError::WrongField { field, active })
        }
    }
}

/// Composite precondition, checked in order: game running, indices in range,
/// spot empty, sub-board playable. The first failure wins.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and binds the move to the player to move.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, request: &MoveRequest) -> Result<Move, MoveError> {
        GameNotOver::check(state)?;
        let (field, spot) = IndicesInRange::check(request)?;
        SpotIsEmpty::check(state, field, spot)?;
        FieldIsPlayable::check(state, field)?;
        Ok(Move::new(state.turn(), field, spot))
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: Exactly one spot went from empty to marked; no mark changed.
pub struct MonotonicMarks;

impl MonotonicMarks {
    /// Returns whether the transition placed one mark and erased none.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let mut placed = 0;
        for field in Position::ALL {
            for spot in Position::ALL {
                let (was, is) = (before.mark(field, spot), after.mark(field, spot));
                if was == is {
                    continue;
                }
                if was != Mark::Empty {
                    warn!(field = field.to_index(), spot = spot.to_index(), "Mark overwritten");
                    return false;
                }
                placed += 1;
            }
        }

        let valid = placed == 1;
        if !valid {
            warn!(placed, "Expected exactly one new mark");
        }
        valid
    }
}

/// Postcondition: Decided sub-boards keep their status and a finished game stays finished.
pub struct FrozenDecisions;

impl FrozenDecisions {
    /// Returns whether the transition left every decision in place.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let statuses_kept = before
            .statuses()
            .iter()
            .zip(after.statuses())
            .all(|(was, is)| was.is_open() || was == is);

        let valid = statuses_kept && !before.status().is_over();
        if !valid {
            warn!(statuses_kept, "Decided state changed");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game in progress
/// - Indices in range
/// - Spot empty
/// - Sub-board playable
///
/// Postconditions:
/// - Marks are monotonic, exactly one placed
/// - Decided statuses stay frozen
/// - All state invariants hold
pub struct MoveContract;

impl Contract<GameState, MoveRequest> for MoveContract {
    type Checked = Move;

    fn pre(state: &GameState, action: &MoveRequest) -> Result<Move, MoveError> {
        LegalMove::check(state, action)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !MonotonicMarks::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: marks changed non-monotonically".to_string(),
            ));
        }
        if !FrozenDecisions::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a decided status changed".to_string(),
            ));
        }

        UltimateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
