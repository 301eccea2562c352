use super::board::Cell;

/// The turn indicator. Player A always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::A => Cell::A,
            Player::B => Cell::B,
        }
    }

    /// Player number as reported through the game interface (1 or 2).
    pub fn code(self) -> i32 {
        match self {
            Player::A => 1,
            Player::B => 2,
        }
    }

    /// Token symbol used in the text board.
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }
}
