//! Rule-string automata
//!
//! A rule string maps the sum of the states in a cell's neighbourhood to the
//! cell's next state. Index 0 is always 0 so that dead space stays dead.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dimensionality of an automata and the board it grows on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "1d")]
    One,
    #[default]
    #[serde(rename = "2d")]
    Two,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1d"),
            Self::Two => f.write_str("2d"),
        }
    }
}

/// Number of rules needed to cover every possible neighbourhood sum
///
/// A 1D neighbourhood holds `2n + 1` cells, a 2D one `(2n + 1)^2`.
pub fn rule_string_len(dimension: Dimension, num_states: usize, neighbourhood_size: u8) -> Result<usize> {
    if num_states == 0 {
        return Err(Error::InvalidStateCount);
    }
    let span = 2 * usize::from(neighbourhood_size) + 1;
    let cells = match dimension {
        Dimension::One => span,
        Dimension::Two => span * span,
    };
    Ok((num_states - 1) * cells + 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automata {
    pub rule_string: Vec<usize>,
    pub dimension: Dimension,
    pub neighbourhood_size: u8,
    pub num_states: usize,
}

impl Automata {
    /// Random automata with a uniformly drawn rule string
    pub fn random<R: Rng + ?Sized>(
        dimension: Dimension,
        num_states: usize,
        neighbourhood_size: u8,
        rng: &mut R,
    ) -> Result<Self> {
        let len = rule_string_len(dimension, num_states, neighbourhood_size)?;
        let mut rule_string: Vec<usize> = (0..len).map(|_| rng.gen_range(0..num_states)).collect();
        if let Some(first) = rule_string.first_mut() {
            *first = 0;
        }
        Ok(Self {
            rule_string,
            dimension,
            neighbourhood_size,
            num_states,
        })
    }

    pub fn new_1d<R: Rng + ?Sized>(num_states: usize, neighbourhood_size: u8, rng: &mut R) -> Result<Self> {
        Self::random(Dimension::One, num_states, neighbourhood_size, rng)
    }

    pub fn new_2d<R: Rng + ?Sized>(num_states: usize, neighbourhood_size: u8, rng: &mut R) -> Result<Self> {
        Self::random(Dimension::Two, num_states, neighbourhood_size, rng)
    }

    /// Build an automata from a known rule string, checking its shape
    pub fn from_rules(
        dimension: Dimension,
        num_states: usize,
        neighbourhood_size: u8,
        rule_string: Vec<usize>,
    ) -> Result<Self> {
        let expected = rule_string_len(dimension, num_states, neighbourhood_size)?;
        if rule_string.len() != expected {
            return Err(Error::RuleLength {
                expected,
                got: rule_string.len(),
            });
        }
        if let Some(&state) = rule_string.iter().find(|&&s| s >= num_states) {
            return Err(Error::StateOutOfRange { state, num_states });
        }
        Ok(Self {
            rule_string,
            dimension,
            neighbourhood_size,
            num_states,
        })
    }

    pub const fn is_2d(&self) -> bool {
        matches!(self.dimension, Dimension::Two)
    }

    /// Whether two automata can be crossed over
    pub fn check_compatible(&self, other: &Self) -> Result<()> {
        if self.dimension != other.dimension {
            return Err(Error::Incompatible("dimension"));
        }
        if self.neighbourhood_size != other.neighbourhood_size {
            return Err(Error::Incompatible("neighbourhood size"));
        }
        if self.num_states != other.num_states {
            return Err(Error::Incompatible("number of states"));
        }
        Ok(())
    }

    /// Rules concatenated into a single string, e.g. `0120`
    pub fn rules(&self) -> String {
        self.rule_string.iter().map(ToString::to_string).collect()
    }
}
