//! Apoptotic cellular automata
//!
//! An automata is apoptotic when the life it grows from a seed never touches
//! the walls of its board and has died out by the end of the run. This crate
//! holds the automata and board model plus the genetic search over rule strings.

pub mod automata;
pub mod board;
pub mod colour;
pub mod config;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod population;
pub mod results;
pub mod tournament;

pub use automata::{Automata, Dimension};
pub use board::{make_boards, Board};
pub use colour::Colour;
pub use config::EvolutionConfig;
pub use error::{Error, Result};
pub use evolution::Evolution;
pub use results::{write_results, ResultFormat};
