//! A single positional die.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Number of dice in every round.
pub const DIE_COUNT: usize = 10;

/// Number of faces on each die; values run from 1 to `FACES`.
pub const FACES: u8 = 6;

/// One die of the round, identified by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Die {
    /// Position in the round, stable until the next new game.
    pub index: usize,
    /// Face value (1-6).
    pub value: u8,
    /// Whether the value is locked across rerolls.
    pub frozen: bool,
}

impl Die {
    /// Create an unfrozen die at `index` with a freshly rolled value.
    pub fn rolled(index: usize, rng: &mut StdRng) -> Self {
        Self {
            index,
            value: roll_face(rng),
            frozen: false,
        }
    }

    /// Reroll the die unless it is frozen.
    pub fn reroll(&mut self, rng: &mut StdRng) {
        if !self.frozen {
            self.value = roll_face(rng);
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.frozen {
            write!(f, "[{}]", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Draw a face uniformly from `1..=FACES`.
fn roll_face(rng: &mut StdRng) -> u8 {
    rng.random_range(1..=FACES)
}
