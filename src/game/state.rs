use std::fmt;

use tracing::debug;

use crate::error::{MoveError, ParseBoardError};

use super::board::{Board, Cell};
use super::strategy::StrategyGame;
use super::win::{evaluate, Outcome};
use super::Player;

const INSTRUCTIONS: [&str; 6] = [
    "Player 1 (A) goes first and plays by choosing a column (0-6).",
    "The token falls to the lowest empty cell of the chosen column.",
    "Player 2 (B) goes next; players alternate turns until the game ends.",
    "To win, connect four of your tokens horizontally, vertically, or along either diagonal.",
    "If the board fills up and nobody has four in a row, the game is a tie.",
    "Tokens are shown as A and B; empty cells are shown as -.",
];

/// A Connect Four game: the board plus whose turn it is.
///
/// The outcome is recomputed from the board on every query. Copy the value
/// to explore hypothetical moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectFour {
    board: Board,
    current_player: Player,
}

impl ConnectFour {
    /// Create initial game state
    pub fn new() -> Self {
        ConnectFour {
            board: Board::new(),
            current_player: Player::A,
        }
    }

    /// Continue a game from an existing position. The player to move is
    /// inferred from the token counts, with A having moved first.
    pub fn from_board(board: Board) -> Result<Self, ParseBoardError> {
        let a = board.token_count(Cell::A);
        let b = board.token_count(Cell::B);
        let current_player = if a == b {
            Player::A
        } else if a == b + 1 {
            Player::B
        } else {
            return Err(ParseBoardError::UnbalancedTokens { a, b });
        };

        Ok(ConnectFour {
            board,
            current_player,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn legal_columns(&self) -> Vec<usize> {
        self.board.legal_columns()
    }

    pub fn moves_played(&self) -> usize {
        self.board.token_count(Cell::A) + self.board.token_count(Cell::B)
    }

    /// Drop the current player's token into `column` and pass the turn.
    ///
    /// Moves are not refused once the game has ended; check
    /// [`is_game_over`](StrategyGame::is_game_over) first.
    pub fn play(&mut self, column: i32) -> Result<usize, MoveError> {
        let player = self.current_player;
        match self.board.apply_move(column, player) {
            Ok(row) => {
                self.current_player = player.other();
                debug!(player = player.code(), column, row, "move committed");
                Ok(row)
            }
            Err(err) => {
                debug!(player = player.code(), column, %err, "move rejected");
                Err(err)
            }
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

impl StrategyGame for ConnectFour {
    type Move = i32;
    type Error = MoveError;

    fn is_game_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    fn winner(&self) -> i32 {
        self.outcome().code()
    }

    fn next_player(&self) -> i32 {
        self.current_player.code()
    }

    fn make_move(&mut self, column: i32) -> Result<(), MoveError> {
        self.play(column).map(|_| ())
    }

    fn instructions(&self) -> String {
        let mut text = INSTRUCTIONS.join("\n");
        text.push('\n');
        text
    }

    fn render(&self) -> String {
        self.board.to_string()
    }
}
