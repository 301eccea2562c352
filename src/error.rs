use std::path::PathBuf;

/// A move request the engine refused. The game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid column: {0} (expected 0-6)")]
    InvalidColumn(i32),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that can occur when reading a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: String },

    #[error("token at row {row}, column {col} is floating above an empty cell")]
    FloatingToken { row: usize, col: usize },

    #[error("token counts cannot come from alternating play (A: {a}, B: {b})")]
    UnbalancedTokens { a: usize, b: usize },
}

/// Errors raised by a move source while acquiring the next move.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input closed before the game ended")]
    Closed,

    #[error("could not read a move from {0:?}")]
    Parse(String),

    #[error("no legal move available")]
    NoLegalMove,

    #[error("{name} proposed a rejected move: {reason}")]
    Rejected { name: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
