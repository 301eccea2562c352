use std::fmt;
use std::str::FromStr;

/// A two-player, turn-based game that an external driver can run without
/// knowing its rules.
///
/// Player numbers are `1` and `2`. [`winner`](StrategyGame::winner) reports
/// `-1` while the game is in progress, `0` for a tie, and the winning player
/// number otherwise.
pub trait StrategyGame {
    /// One move, as produced by an input collaborator.
    type Move: Copy + fmt::Display + FromStr;

    /// Why a move was refused.
    type Error: std::error::Error + Send + Sync + 'static;

    fn is_game_over(&self) -> bool;

    fn winner(&self) -> i32;

    fn next_player(&self) -> i32;

    /// Apply a move for the player to move. A refused move leaves the game
    /// unchanged and does not consume the turn.
    fn make_move(&mut self, mv: Self::Move) -> Result<(), Self::Error>;

    /// Rules text for players.
    fn instructions(&self) -> String;

    /// Text snapshot of the current position.
    fn render(&self) -> String;
}
