//! Error type shared by the automata engine

use std::path::PathBuf;

/// Everything that can go wrong while building, growing or evolving boards
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("automata needs at least one state")]
    InvalidStateCount,
    #[error("rule string has length {got}, expected {expected}")]
    RuleLength { expected: usize, got: usize },
    #[error("state {state} exceeds limit of {num_states} states")]
    StateOutOfRange { state: usize, num_states: usize },
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyBoard { width: usize, height: usize },
    #[error("start population of length {len} does not fit a board {width} wide")]
    StartTooWide { len: usize, width: usize },
    #[error("length of 2D start population ({0}) is not a perfect square")]
    NotSquare(usize),
    #[error("neighbourhood sum {sum} has no rule (rule string length {len})")]
    MissingRule { sum: usize, len: usize },
    #[error("board has no automata")]
    MissingAutomata,
    #[error("no colour for state {0}")]
    MissingColour(usize),
    #[error("alpha {0} outside [0, 1]")]
    InvalidAlpha(f64),
    #[error("cannot apply {max} mutations to a rule string of length {len}")]
    TooManyMutations { max: usize, len: usize },
    #[error("cannot cut a rule string of length {len} {max} times")]
    TooManyCuts { max: usize, len: usize },
    #[error("automata differ in {0}")]
    Incompatible(&'static str),
    #[error("tournament of {size} needs between 2 and {population} boards")]
    InvalidTournamentSize { size: usize, population: usize },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
