//! Strictly Ultimate - pure ultimate tic-tac-toe rules
//!
//! A 3x3 meta-board of nine tic-tac-toe sub-boards. Winning a sub-board
//! claims that cell of the meta-board; three claimed cells in a row win the
//! game. Each move sends the opponent to the sub-board matching the spot
//! just played, unless that sub-board is already decided.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns one game and is the only mutation path
//! - **Rules**: one win/draw routine applied to sub-boards and the meta-board
//! - **Contracts**: ordered move preconditions and transition postconditions
//! - **Invariants**: composable state checks, run after every move in debug builds
//! - **Events**: sub-board and game decisions, returned and pushed to observers
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::{ActiveField, GameEngine, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(4, 4)?;
//!
//! assert_eq!(engine.current_turn(), Player::O);
//! assert_eq!(engine.active_field(), ActiveField::Field(Position::Center));
//! # Ok::<(), strictly_ultimate::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod engine;
mod events;
mod kani_support;
mod outcome;
mod position;
mod settings;
mod state;
mod sub_board;
mod types;

// Public rule building blocks
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use board::{ActiveField, Board};
pub use outcome::Outcome;
pub use position::Position;
pub use settings::RuleSettings;
pub use state::GameState;
pub use sub_board::SubBoard;
pub use types::{GameStatus, Mark, Player, SubBoardStatus};

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError, MoveRequest};

// Crate-level exports - Engine and events
pub use engine::GameEngine;
pub use events::{GameEvent, GameObserver, MoveOutcome, NextTurn, SubBoardDecision};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{
    ActiveFieldInvariant, BalancedMarksInvariant, FrozenStatusInvariant, GameStatusInvariant,
    Invariant, InvariantSet, InvariantViolation, UltimateInvariants,
};
