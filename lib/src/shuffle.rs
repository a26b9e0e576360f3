//! # Deterministic shuffle and opening hand deal
//!
//! The shuffle is an unbiased Fisher-Yates pass driven by [`Mulberry32`].
//! Earlier incarnations of this tool shuffled by sorting with a random
//! comparator, which produces biased, engine-dependent orders; the explicit
//! index-swap pass here is a correctness fix, not a stylistic one.
use crate::error::Error;
use crate::rng::Mulberry32;

/// Returns a permutation of `deck` determined entirely by `seed`.
///
/// Same seed and same deck (same length, contents, and initial order) yield an
/// identical permutation on every run. Empty and single-card decks are
/// returned unchanged.
pub fn shuffle<T: Clone>(deck: &[T], seed: i64) -> Vec<T> {
  let mut shuffled = deck.to_vec();
  let mut rng = Mulberry32::new(seed);
  shuffle_in_place(&mut shuffled, &mut rng);
  shuffled
}

/// Shuffles `cards` in place, consuming values from `rng`.
///
/// Exposed so callers simulating several consecutive games can keep a single
/// generator across shuffles instead of reseeding per game.
pub fn shuffle_in_place<T>(cards: &mut [T], rng: &mut Mulberry32) {
  // Fisher-Yates: j is uniform over 0..=i since next_f64() < 1.0
  for i in (1..cards.len()).rev() {
    let j = (rng.next_f64() * (i as f64 + 1.0)) as usize;
    cards.swap(i, j);
  }
}

/// Returns the opening hand: the first `hand_size` cards of `shuffled`.
///
/// A pure prefix take with no further randomness. Asking for more cards than
/// the deck holds returns the entire deck; asking for cards from an empty deck
/// is an error.
pub fn deal<T>(shuffled: &[T], hand_size: usize) -> Result<&[T], Error> {
  if shuffled.is_empty() && hand_size > 0 {
    return Err(Error::InvalidArgument(format!(
      "cannot deal {} cards from an empty deck",
      hand_size
    )));
  }
  let hand_size = std::cmp::min(hand_size, shuffled.len());
  Ok(&shuffled[..hand_size])
}
