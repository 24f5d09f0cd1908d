//! Seeded 2-D fractal noise used for terrain elevation.
//!
//! A [`NoiseContext`] is passed explicitly to every displacement call. It is
//! never cached: reseeding changes the very next sample, and meshes that were
//! already displaced keep their elevations.

use noise::{NoiseFn, Perlin};
use rand::Rng;

/// Frequency of the first octave.
pub const BASE_FREQUENCY: f64 = 0.01;

/// Number of octaves composited per sample.
pub const OCTAVES: u32 = 4;

/// Multi-octave Perlin noise keyed by a seed.
///
/// Each octave doubles the frequency and halves the amplitude. Samples are
/// normalized by the total amplitude and remapped to `[0, 1]`.
#[derive(Clone, Debug)]
pub struct NoiseContext {
    seed: u32,
    frequency: f64,
    octaves: u32,
    perlin: Perlin,
}

impl NoiseContext {
    /// Context with the default frequency and octave count.
    pub fn new(seed: u32) -> Self {
        Self::with_params(seed, BASE_FREQUENCY, OCTAVES)
    }

    pub fn with_params(seed: u32, frequency: f64, octaves: u32) -> Self {
        Self {
            seed,
            frequency,
            octaves,
            perlin: Perlin::new(seed),
        }
    }

    /// Context seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Replace the seed. Takes effect for the next sample.
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
        self.perlin = Perlin::new(seed);
    }

    /// Elevation in `[0, 1]` at horizontal position `(x, z)`.
    ///
    /// Zero octaves sample as 0.
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        if self.octaves == 0 {
            return 0.0;
        }
        let (x, z) = (x as f64, z as f64);
        let mut total = 0.0;
        let mut total_amplitude = 0.0;
        let mut frequency = self.frequency;
        let mut amplitude = 1.0;

        for _ in 0..self.octaves {
            total += self.perlin.get([x * frequency, z * frequency]) * amplitude;
            total_amplitude += amplitude;
            frequency *= 2.0;
            amplitude *= 0.5;
        }

        ((total / total_amplitude) * 0.5 + 0.5).clamp(0.0, 1.0) as f32
    }
}
