//! Seeded 1D noise for column heights
//!
//! Wraps a Perlin generator and samples it along a fixed line of the 2D
//! noise plane. The line sits off the integer lattice so samples at whole
//! coordinates are not pinned to zero.

use noise::{NoiseFn, Perlin};

/// Row in the 2D noise plane that the 1D field is read from.
const SAMPLE_LINE: f64 = 0.5;

/// Frequency multiplier of the stone layer relative to the surface layer.
pub const STONE_FREQUENCY_RATIO: f64 = 0.5;

/// Deterministic smooth noise of one coordinate, in [-1, 1].
#[derive(Clone, Debug)]
pub struct NoiseField {
    seed: u32,
    perlin: Perlin,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            perlin: Perlin::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        self.perlin.get([x, SAMPLE_LINE]).clamp(-1.0, 1.0)
    }

    /// Surface roughness for a column.
    pub fn surface(&self, col: usize, scale: f64) -> f64 {
        self.sample(col as f64 * scale)
    }

    /// Stone roughness for a column: half the frequency, shifted by `phase`.
    pub fn stone(&self, col: usize, scale: f64, phase: f64) -> f64 {
        self.sample(col as f64 * scale * STONE_FREQUENCY_RATIO + phase)
    }
}
