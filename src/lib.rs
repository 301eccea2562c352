//! # Connect Four
//!
//! A Connect Four rules engine exposed through a generic turn-based game
//! interface, plus a console driver and simple computer players.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, players, win detection, [`game::StrategyGame`]
//! - [`ai`] — Agent trait and a random agent
//! - [`console`] — Line-based driver for any `StrategyGame`
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
