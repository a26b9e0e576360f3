//! # Seeded pseudo-random number generation
//!
//! The shuffle engine promises byte-for-byte identical output for a given seed
//! across runs, processes, and platforms, so the generator is pinned to a fixed
//! 32-bit mixing function (mulberry32) rather than delegated to an external RNG
//! whose stream could change between crate versions.
use rand::prelude::*;
use rand::rngs::SmallRng;

/// A 32-bit state pseudo-random generator with a fixed, portable output stream.
///
/// Each draw advances the state by `0x6D2B79F5 (mod 2^32)` and mixes it with an
/// xor-shift followed by two multiply-xor rounds. The stream is part of the
/// crate contract: two `Mulberry32` values built from the same seed produce
/// identical sequences forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mulberry32 {
  state: u32,
}

impl Mulberry32 {
  /// Returns a generator seeded from `seed`.
  ///
  /// Any integer is accepted: the seed is normalized to its low 32 bits, so
  /// zero and negative seeds are valid (`-1` is equivalent to `4294967295`).
  pub fn new(seed: i64) -> Self {
    Self { state: seed as u32 }
  }

  /// Advances the generator and returns the next uniform `u32`
  pub fn next_u32(&mut self) -> u32 {
    self.state = self.state.wrapping_add(0x6D2B_79F5);
    let mut t = self.state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    t ^ (t >> 14)
  }

  /// Advances the generator and returns the next uniform value in `[0, 1)`
  pub fn next_f64(&mut self) -> f64 {
    f64::from(self.next_u32()) / 4_294_967_296.0
  }
}

/// Returns a fresh seed drawn from OS entropy.
///
/// For hosts that want a "random" game that can still be replayed: draw a seed
/// here once, hand it to [`crate::shuffle::shuffle`], and store it alongside
/// the result.
/// The value is always in `u32` range so it round-trips unchanged through the
/// seed normalization of [`Mulberry32::new`].
pub fn random_seed() -> i64 {
  i64::from(SmallRng::from_entropy().gen::<u32>())
}
