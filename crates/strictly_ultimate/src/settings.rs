//! Rule settings a game is played under.

use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rule variations accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RuleSettings {
    /// Whether a decided (won or drawn) sub-board refuses further marks.
    ///
    /// When `false`, marks may still be placed into a decided sub-board
    /// while the active field allows it; its status stays frozen.
    closed_decided_boards: bool,
}

impl RuleSettings {
    /// Creates the default rule settings.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `closed_decided_boards` set.
    #[instrument]
    pub fn with_closed_decided_boards(self, closed: bool) -> Self {
        Self {
            closed_decided_boards: closed,
        }
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            closed_decided_boards: true,
        }
    }
}
