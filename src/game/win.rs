use tracing::instrument;

use super::board::{Board, COLS, ROWS};
use super::Player;

/// Length of a winning run.
pub const CONNECT: usize = 4;

/// Direction vectors as (d_row, d_col): horizontal, vertical,
/// anti-diagonal (up-right), main diagonal (down-right).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

/// Game outcome derived from a grid. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Winner(Player),
    Tie,
}

impl Outcome {
    /// `-1` in progress, `0` tie, otherwise the winner's player code.
    pub fn code(self) -> i32 {
        match self {
            Outcome::InProgress => -1,
            Outcome::Tie => 0,
            Outcome::Winner(player) => player.code(),
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Scan the grid for four in a row, then for a full board.
///
/// Cells are visited top-to-bottom, left-to-right, and the first winning run
/// found in that order is reported.
#[instrument(level = "trace", skip_all)]
pub fn evaluate(board: &Board) -> Outcome {
    for row in 0..ROWS {
        for col in 0..COLS {
            let Some(player) = board.get(row, col).player() else {
                continue;
            };
            if DIRECTIONS
                .iter()
                .any(|&(d_row, d_col)| run_from(board, row, col, d_row, d_col))
            {
                return Outcome::Winner(player);
            }
        }
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

/// Whether the next `CONNECT - 1` cells along (d_row, d_col) stay on the
/// board and match the cell at (row, col).
fn run_from(board: &Board, row: usize, col: usize, d_row: isize, d_col: isize) -> bool {
    let cell = board.get(row, col);
    (1..CONNECT as isize).all(|step| {
        let r = row as isize + d_row * step;
        let c = col as isize + d_col * step;
        (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && board.get(r as usize, c as usize) == cell
    })
}
