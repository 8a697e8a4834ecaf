//! Deterministic seeded sequence generator.
//!
//! `seeded_rand` is a pure function of its seed: no hidden state, so the same
//! seed yields the same float on every platform and every run. Callers draw a
//! sequence by advancing the seed themselves (`seed`, `seed + 1`, ...).
//! This is for reproducibility, not statistical quality.

/// Scale applied to `sin(seed)` before taking the fractional part.
const SIN_SCALE: f64 = 10_000.0;

/// Float in [0, 1) derived from the fractional part of `sin(seed) * 10000`.
pub fn seeded_rand(seed: i64) -> f64 {
    let x = (seed as f64).sin() * SIN_SCALE;
    let frac = x - x.floor();
    // x - floor(x) can round up to exactly 1.0 for tiny negative x.
    if frac >= 1.0 {
        0.0
    } else {
        frac
    }
}

/// Seed for a ticker: the sum of its UTF-16 code units.
///
/// Characters outside the BMP contribute both surrogate halves.
pub fn ticker_seed(ticker: &str) -> i64 {
    ticker.encode_utf16().map(i64::from).sum()
}

/// Restartable infinite sequence `seeded_rand(start), seeded_rand(start + 1), ...`.
///
/// The counter is the only state and is fully determined by `start` and the
/// number of draws; cloning restarts from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSequence {
    next_seed: i64,
}

impl SeedSequence {
    pub fn new(start: i64) -> Self {
        Self { next_seed: start }
    }

    pub fn next_seed(&self) -> i64 {
        self.next_seed
    }
}

impl Iterator for SeedSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = seeded_rand(self.next_seed);
        self.next_seed = self.next_seed.wrapping_add(1);
        Some(value)
    }
}
