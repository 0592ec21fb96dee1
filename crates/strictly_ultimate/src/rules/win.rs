//! Win detection shared by sub-boards and the meta-board.

use super::super::{Mark, Player, SubBoardStatus};
use tracing::instrument;

/// The 8 winning lines, checked in this order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A cell of a 3x3 grid that may be owned by a player.
///
/// Spots are owned by their mark; sub-boards are owned by their winner.
/// Empty spots and open or drawn sub-boards are neutral.
pub trait LineCell: Copy {
    /// Returns the player owning this cell, if any.
    fn owner(self) -> Option<Player>;
}

impl LineCell for Mark {
    fn owner(self) -> Option<Player> {
        Mark::owner(self)
    }
}

impl LineCell for SubBoardStatus {
    fn owner(self) -> Option<Player> {
        self.winner()
    }
}

/// Checks the grid for a completed line.
///
/// Returns the owner of the first line (in [`LINES`] order) whose three
/// cells belong to the same player, `None` otherwise.
#[instrument(skip(cells))]
pub fn detect_outcome<C: LineCell>(cells: &[C; 9]) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let owner = cells[a].owner()?;
        (cells[b].owner() == Some(owner) && cells[c].owner() == Some(owner)).then_some(owner)
    })
}

/// Checks whether `player` owns at least one complete line.
pub fn has_line<C: LineCell>(cells: &[C; 9], player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i].owner() == Some(player)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(layout: &str) -> [Mark; 9] {
        let mut cells = [Mark::Empty; 9];
        for (cell, ch) in cells.iter_mut().zip(layout.chars().filter(|c| !c.is_whitespace())) {
            *cell = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        cells
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(detect_outcome(&[Mark::Empty; 9]), None);
        assert_eq!(detect_outcome(&[SubBoardStatus::Open; 9]), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(detect_outcome(&marks("XXX O.O ...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column_and_anti_diagonal() {
        assert_eq!(detect_outcome(&marks(".O. XO. XO.")), Some(Player::O));
        assert_eq!(detect_outcome(&marks("..X .X. X..")), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(detect_outcome(&marks("XX. ... ...")), None);
    }

    #[test]
    fn test_full_grid_without_line() {
        assert_eq!(detect_outcome(&marks("XOX OXX OXO")), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Only reachable in the permissive rule variant, but the order must be stable.
        assert_eq!(detect_outcome(&marks("OOO XXX ...")), Some(Player::O));
    }

    #[test]
    fn test_drawn_sub_boards_are_neutral() {
        let statuses = [
            SubBoardStatus::Drawn,
            SubBoardStatus::Drawn,
            SubBoardStatus::Drawn,
            SubBoardStatus::Won(Player::O),
            SubBoardStatus::Won(Player::O),
            SubBoardStatus::Won(Player::O),
            SubBoardStatus::Open,
            SubBoardStatus::Open,
            SubBoardStatus::Open,
        ];
        assert_eq!(detect_outcome(&statuses), Some(Player::O));
        assert!(!has_line(&statuses, Player::X));
    }

    #[test]
    fn test_has_line_sees_every_line() {
        let grid = marks("OOO XXX ...");
        assert!(has_line(&grid, Player::X));
        assert!(has_line(&grid, Player::O));
    }
}
