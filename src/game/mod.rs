//! Core Connect Four rules: board, players, win detection, and the game
//! state behind the generic [`StrategyGame`] interface.

mod board;
mod player;
mod state;
mod strategy;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::ConnectFour;
pub use strategy::StrategyGame;
pub use win::{evaluate, Outcome, CONNECT};
