use rand::Rng;

use crate::automata::{Automata, Dimension};
use crate::error::Result;

/// `size` random automata of the same shape
pub fn make_population<R: Rng + ?Sized>(
    dimension: Dimension,
    size: usize,
    num_states: usize,
    neighbourhood_size: u8,
    rng: &mut R,
) -> Result<Vec<Automata>> {
    (0..size)
        .map(|_| Automata::random(dimension, num_states, neighbourhood_size, rng))
        .collect()
}

pub fn make_1d_population<R: Rng + ?Sized>(
    size: usize,
    num_states: usize,
    neighbourhood_size: u8,
    rng: &mut R,
) -> Result<Vec<Automata>> {
    make_population(Dimension::One, size, num_states, neighbourhood_size, rng)
}

pub fn make_2d_population<R: Rng + ?Sized>(
    size: usize,
    num_states: usize,
    neighbourhood_size: u8,
    rng: &mut R,
) -> Result<Vec<Automata>> {
    make_population(Dimension::Two, size, num_states, neighbourhood_size, rng)
}
