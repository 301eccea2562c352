//! Computer players that drive a game from outside the rules engine.

mod agent;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;
