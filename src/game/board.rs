use std::fmt;
use std::str::FromStr;

use crate::error::{MoveError, ParseBoardError};

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// Symbol used in the text board: `-`, `A` or `B`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::A => 'A',
            Cell::B => 'B',
        }
    }

    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }

    fn from_symbol(symbol: &str) -> Option<Cell> {
        match symbol {
            "-" => Some(Cell::Empty),
            "A" => Some(Cell::A),
            "B" => Some(Cell::B),
            _ => None,
        }
    }
}

/// The 6x7 grid. Every column keeps its empty cells strictly above its
/// tokens; the only write path is [`Board::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Lowest empty row in a column, or `None` if the column is full.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still take a token, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// The board is full once the top row is. Gravity guarantees every
    /// cell below a filled top cell is filled too.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of cells holding `cell`.
    pub fn token_count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    /// Drop `player`'s token into `column`, returning the row it landed in.
    ///
    /// The column is validated before anything is written, so on error the
    /// board is unchanged.
    pub fn apply_move(&mut self, column: i32, player: Player) -> Result<usize, MoveError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(MoveError::InvalidColumn(column))?;

        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;

        self.commit(row, col, player.to_cell());
        Ok(row)
    }

    fn commit(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        for line in lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the rendered form: one line per row, top row first, symbols
    /// separated by whitespace. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if rows.len() != ROWS {
            return Err(ParseBoardError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<&str> = line.split_whitespace().collect();
            if symbols.len() != COLS {
                return Err(ParseBoardError::RowWidth {
                    row,
                    expected: COLS,
                    found: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] =
                    Cell::from_symbol(symbol).ok_or_else(|| ParseBoardError::UnknownSymbol {
                        row,
                        col,
                        symbol: symbol.to_string(),
                    })?;
            }
        }

        // Gravity: scanning upward, no token may sit above an empty cell.
        for col in 0..COLS {
            let mut seen_empty = false;
            for row in (0..ROWS).rev() {
                match board.cells[row][col] {
                    Cell::Empty => seen_empty = true,
                    _ if seen_empty => return Err(ParseBoardError::FloatingToken { row, col }),
                    _ => {}
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply_move_drops_to_bottom() {
        let mut board = Board::new();

        let row = board.apply_move(3, Player::A).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::A);

        let row = board.apply_move(3, Player::B).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::B);
        assert_eq!(board.lowest_empty_row(3), Some(3));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.apply_move(0, Player::A).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.lowest_empty_row(0), None);

        let before = board;
        assert_eq!(board.apply_move(0, Player::B), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(7, Player::A), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.apply_move(-1, Player::A), Err(MoveError::InvalidColumn(-1)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            assert!(!board.is_full());
            for _ in 0..ROWS {
                board.apply_move(col as i32, Player::A).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
        assert_eq!(board.token_count(Cell::A), ROWS * COLS);
    }

    #[test]
    fn test_display_empty_board() {
        let expected = "- - - - - - -\n".repeat(ROWS);
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_display_after_moves() {
        let mut board = Board::new();
        board.apply_move(0, Player::A).unwrap();
        board.apply_move(6, Player::B).unwrap();
        board.apply_move(0, Player::B).unwrap();

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[4], "B - - - - - -");
        assert_eq!(lines[5], "A - - - - - B");
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_parse_rendered_board() {
        let mut board = Board::new();
        for col in [3, 3, 2, 4, 4] {
            board.apply_move(col, Player::A).unwrap();
        }
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_tolerates_trailing_spaces() {
        let text = "- - - - - - - \n".repeat(5) + "A B - - - - - \n";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(5, 0), Cell::A);
        assert_eq!(board.get(5, 1), Cell::B);
    }

    #[test]
    fn test_parse_rejects_floating_token() {
        let text = "- - - - - - -\n".repeat(4) + "- A - - - - -\n" + "- - - - - - -\n";
        assert_eq!(
            text.parse::<Board>(),
            Err(ParseBoardError::FloatingToken { row: 4, col: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_shape_and_symbols() {
        let short = "- - - - - - -\n".repeat(5);
        assert!(matches!(
            short.parse::<Board>(),
            Err(ParseBoardError::RowCount { found: 5, .. })
        ));

        let narrow = "- - - - - - -\n".repeat(5) + "- - -\n";
        assert!(matches!(
            narrow.parse::<Board>(),
            Err(ParseBoardError::RowWidth { row: 5, found: 3, .. })
        ));

        let unknown = "- - - - - - -\n".repeat(5) + "X - - - - - -\n";
        assert!(matches!(
            unknown.parse::<Board>(),
            Err(ParseBoardError::UnknownSymbol { row: 5, col: 0, .. })
        ));
    }
}
