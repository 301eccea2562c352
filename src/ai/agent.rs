use crate::game::ConnectFour;

/// A player that picks columns on its own. Agents sit outside the rules
/// engine: they read a game and propose a move, the game decides whether it
/// is legal.
pub trait Agent {
    /// Select a column for the player to move, or `None` if the board has
    /// no open column.
    fn select_column(&mut self, game: &ConnectFour) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
