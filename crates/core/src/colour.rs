use rand::Rng;

use crate::error::{Error, Result};

/// RGBA colour used to paint a cell state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Colour {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&a) {
            return Err(Error::InvalidAlpha(a));
        }
        Ok(Self { r, g, b, a })
    }

    /// CSS `rgba(..)` value
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One random colour per state
pub fn palette<R: Rng + ?Sized>(num_states: usize, rng: &mut R) -> Vec<Colour> {
    (0..num_states)
        .map(|_| Colour {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
            a: rng.gen_range(0.0..=1.0),
        })
        .collect()
}
