//! Plain-text rendering of the 9x9 grid.

use crate::config::DisplayConfig;
use strictly_ultimate::{GameState, GameStatus, Mark, Position, SubBoardStatus};

const META_SEPARATOR: &str = "------+-------+------";

/// Renders the grid: sub-boards laid out as the meta-board, spots row-major inside each.
///
/// ```text
///  X . . | . . . | . . .
/// ```
pub fn render_board(state: &GameState, display: &DisplayConfig) -> String {
    let mut out = String::new();

    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            out.push_str(META_SEPARATOR);
            out.push('\n');
        }
        let cells: Vec<String> = (0..3)
            .map(|meta_col| {
                let field = Position::ALL[(row / 3) * 3 + meta_col];
                (0..3)
                    .map(|col| {
                        let spot = Position::ALL[(row % 3) * 3 + col];
                        cell_symbol(state.mark(field, spot), spot, display).to_string()
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }

    out
}

/// Renders the lines under the grid: decided sub-boards, then turn or result.
pub fn render_status(state: &GameState, display: &DisplayConfig) -> String {
    let mut out = String::new();

    let decided: Vec<String> = Position::ALL
        .iter()
        .filter_map(|&field| match state.status_of(field) {
            SubBoardStatus::Open => None,
            SubBoardStatus::Won(player) => Some(format!(
                "{} won by {}",
                field.to_index(),
                symbol(Mark::from(player), display)
            )),
            SubBoardStatus::Drawn => Some(format!("{} drawn", field.to_index())),
        })
        .collect();
    if !decided.is_empty() {
        out.push_str(&format!("Decided: {}\n", decided.join(", ")));
    }

    match state.status() {
        GameStatus::InProgress => out.push_str(&format!(
            "Turn: {}  Active field: {}\n",
            symbol(Mark::from(state.turn()), display),
            state.active_field()
        )),
        GameStatus::Won(player) => out.push_str(&format!(
            "Game over: {} wins\n",
            symbol(Mark::from(player), display)
        )),
        GameStatus::Drawn => out.push_str("Game over: draw\n"),
    }

    out
}

fn cell_symbol(mark: Mark, spot: Position, display: &DisplayConfig) -> char {
    match mark {
        Mark::Empty if *display.show_spot_numbers() => {
            char::from_digit(spot.to_index() as u32, 10).unwrap_or('.')
        }
        other => symbol(other, display),
    }
}

fn symbol(mark: Mark, display: &DisplayConfig) -> char {
    match mark {
        Mark::Empty => '.',
        Mark::X => *display.x_symbol(),
        Mark::O => *display.o_symbol(),
    }
}
