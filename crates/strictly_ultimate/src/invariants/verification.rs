//! Formal verification of the rules using Kani model checker.
//!
//! These proof harnesses verify properties for ALL possible grids (bounded).

#[cfg(kani)]
mod proofs {
    use crate::rules::{detect_outcome, has_line};
    use crate::{
        BalancedMarksInvariant, GameEngine, Invariant, InvariantSet, Mark, Position,
        SubBoardStatus, UltimateInvariants,
    };

    /// Proves: A reported winner always owns a line.
    #[kani::proof]
    fn verify_detect_outcome_sound() {
        let marks: [Mark; 9] = kani::any();

        if let Some(winner) = detect_outcome(&marks) {
            assert!(has_line(&marks, winner), "Winner without a line");
        }
    }

    /// Proves: Drawn sub-boards never contribute to a meta-board line.
    #[kani::proof]
    fn verify_drawn_is_neutral() {
        let statuses: [SubBoardStatus; 9] = kani::any();

        if let Some(winner) = detect_outcome(&statuses) {
            assert!(statuses.iter().filter(|s| s.winner() == Some(winner)).count() >= 3);
        }
    }

    /// Proves: Any opening move keeps every invariant.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_opening_move_keeps_invariants() {
        let field: Position = kani::any();
        let spot: Position = kani::any();

        let mut engine = GameEngine::new();
        let result = engine.apply_move(field.to_index(), spot.to_index());

        assert!(result.is_ok(), "Opening move rejected");
        assert!(BalancedMarksInvariant::holds(engine.state()));
        assert!(UltimateInvariants::check_all(engine.state()).is_ok());
    }
}
