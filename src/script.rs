//! Move parsing and scripted replay.
//!
//! A move is two tokens, field then spot, separated by whitespace or a
//! comma. Each token is a 0-based index or a position label such as
//! `center`. Script files hold one move per line; blank lines and lines
//! starting with `#` are skipped.

use derive_more::{Display, Error};
use strictly_ultimate::{GameEngine, MoveError, MoveOutcome, MoveRequest, Position};
use tracing::{debug, info, instrument};

/// Failure while parsing or replaying a move script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// The line is not a move.
    #[display("line {line}: cannot parse move {text:?} (expected \"field spot\")")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Offending text.
        text: String,
    },
    /// The engine refused the move.
    #[display("line {line}: move {request} rejected: {source}")]
    Rejected {
        /// 1-based line number.
        line: usize,
        /// The move as parsed.
        request: MoveRequest,
        /// Why the engine refused it.
        source: MoveError,
    },
}

/// Parses one move.
///
/// Numeric tokens pass through unchecked so the engine can report
/// out-of-range indices itself.
pub fn parse_move(text: &str) -> Option<MoveRequest> {
    let mut tokens = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    let field = parse_index(tokens.next()?)?;
    let spot = parse_index(tokens.next()?)?;
    if tokens.next().is_some() {
        return None;
    }
    Some(MoveRequest::new(field, spot))
}

fn parse_index(token: &str) -> Option<usize> {
    token
        .parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(token).map(|pos| pos.to_index()))
}

/// Parses a whole script into numbered moves.
#[instrument(skip(script))]
pub fn parse_script(script: &str) -> Result<Vec<(usize, MoveRequest)>, ScriptError> {
    script
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| {
            parse_move(text)
                .map(|request| (line, request))
                .ok_or_else(|| ScriptError::Parse {
                    line,
                    text: text.to_string(),
                })
        })
        .collect()
}

/// Applies every move in `script` to `engine`, stopping at the first failure.
///
/// Moves before the failing line stay applied.
#[instrument(skip(engine, script))]
pub fn replay(engine: &mut GameEngine, script: &str) -> Result<Vec<MoveOutcome>, ScriptError> {
    let moves = parse_script(script)?;
    debug!(count = moves.len(), "Script parsed");

    let mut outcomes = Vec::with_capacity(moves.len());
    for (line, request) in moves {
        let outcome = engine
            .apply_move(request.field, request.spot)
            .map_err(|source| ScriptError::Rejected {
                line,
                request,
                source,
            })?;
        outcomes.push(outcome);
    }

    info!(applied = outcomes.len(), status = ?engine.status(), "Replay finished");
    Ok(outcomes)
}
