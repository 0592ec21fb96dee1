//! Strictly Ultimate Games - terminal front end
//!
//! Drives [`strictly_ultimate::GameEngine`] from a terminal or a move script.
//!
//! # Architecture
//!
//! - **Config**: TOML file with rule variations, display options and log filter
//! - **Render**: text drawing of the 9x9 grid and a status line
//! - **Script**: move parsing and scripted replay
//! - **Session**: interactive line-by-line play
//!
//! # Example
//!
//! ```
//! use strictly_ultimate_games::{replay, AppConfig};
//! use strictly_ultimate::{GameEngine, Player};
//!
//! let config = AppConfig::default();
//! let mut engine = GameEngine::with_settings(*config.rules());
//! replay(&mut engine, "4 4\n4 0\n")?;
//!
//! assert_eq!(engine.current_turn(), Player::X);
//! # Ok::<(), strictly_ultimate_games::ScriptError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod render;
mod script;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DisplayConfig};

// Crate-level exports - Presentation
pub use render::{render_board, render_status};

// Crate-level exports - Scripts and sessions
pub use script::{ScriptError, parse_move, parse_script, replay};
pub use session::Session;
