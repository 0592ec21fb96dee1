//! First-class invariants for ultimate tic-tac-toe.
//!
//! Invariants are logical properties of a single [`GameState`] that must hold
//! throughout a game. They are testable independently and serve as
//! documentation of the engine's guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod active_field;
pub mod balanced_marks;
pub mod frozen_status;
pub mod game_status;

pub use active_field::ActiveFieldInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use frozen_status::FrozenStatusInvariant;
pub use game_status::GameStatusInvariant;

use super::GameState;

/// All ultimate tic-tac-toe invariants as a composable set.
pub type UltimateInvariants = (
    BalancedMarksInvariant,
    FrozenStatusInvariant,
    ActiveFieldInvariant,
    GameStatusInvariant,
);

/// Checks the full invariant set against a state.
pub fn check_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    UltimateInvariants::check_all(state)
}
