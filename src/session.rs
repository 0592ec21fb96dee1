//! Interactive play over a line-oriented terminal.

use crate::config::{AppConfig, DisplayConfig};
use crate::render::{render_board, render_status};
use crate::script::parse_move;
use std::io::{BufRead, Write};
use strictly_ultimate::{GameEngine, GameEvent, Outcome, SubBoardStatus};
use tracing::{debug, info, instrument};

/// One game driven by lines of input.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    display: DisplayConfig,
}

impl Session {
    /// Starts a game under the configured rules.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let mut engine = GameEngine::with_settings(*config.rules());
        engine.subscribe(log_event);
        Self {
            engine,
            display: config.display().clone(),
        }
    }

    /// The underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Reads moves from `input` until the game ends, the player quits, or input runs out.
    ///
    /// Returns the outcome if the game was decided.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> std::io::Result<Option<Outcome>> {
        self.show(&mut output)?;
        self.prompt(&mut output)?;

        for line in input.lines() {
            let line = line?;
            let text = line.trim();

            if text.is_empty() {
                self.prompt(&mut output)?;
                continue;
            }
            if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("q") {
                info!("Player quit");
                writeln!(output, "Bye.")?;
                return Ok(None);
            }

            let Some(request) = parse_move(text) else {
                writeln!(output, "Could not read {text:?}. Enter a move as \"field spot\".")?;
                self.prompt(&mut output)?;
                continue;
            };

            match self.engine.apply_move(request.field, request.spot) {
                Ok(outcome) => {
                    for event in outcome.events() {
                        writeln!(output, "{}", describe(&event))?;
                    }
                    self.show(&mut output)?;
                    if let Some(result) = outcome.outcome() {
                        return Ok(Some(*result));
                    }
                }
                Err(error) => {
                    writeln!(output, "Illegal move {request}: {error}")?;
                }
            }
            self.prompt(&mut output)?;
        }

        debug!("Input exhausted");
        Ok(None)
    }

    fn show<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        let state = self.engine.state();
        write!(output, "\n{}", render_board(state, &self.display))?;
        write!(output, "{}", render_status(state, &self.display))
    }

    fn prompt<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        write!(output, "{} > ", self.engine.current_turn())?;
        output.flush()
    }
}

fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::SubBoardDecided {
            field,
            status: SubBoardStatus::Won(player),
        } => format!("Sub-board {} won by {}", field.to_index(), player),
        GameEvent::SubBoardDecided { field, .. } => {
            format!("Sub-board {} drawn", field.to_index())
        }
        GameEvent::GameDecided(outcome) => format!("Game over: {}", outcome),
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::SubBoardDecided { field, status } => {
            info!(field = field.to_index(), %status, "Sub-board decided");
        }
        GameEvent::GameDecided(outcome) => {
            info!(%outcome, "Game decided");
        }
    }
}
