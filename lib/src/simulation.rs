//! # Draw simulation
//!
//! The facade a request layer talks to: deck in, seed in, one reproducible
//! game out. [`DrawResult`] carries the full shuffled order plus the opening
//! hand boundary, so goldfishing hosts can both show the opening hand and keep
//! flipping cards off the top turn by turn.
use crate::error::Error;
use crate::shuffle::shuffle;

/// The outcome of one simulated shuffle-and-draw.
///
/// The opening hand is always the first `opening_hand_size` cards of `order`;
/// no draw step reorders anything after the initial shuffle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult<T> {
  order: Vec<T>,
  opening_hand_size: usize,
}

impl<T> DrawResult<T> {
  /// Returns the full shuffled order of the deck
  pub fn order(&self) -> &[T] {
    &self.order
  }

  /// Returns the opening hand
  #[inline]
  pub fn opening(&self) -> &[T] {
    self.slice(0, self.opening_hand_size)
  }

  /// Returns the next `draws` cards after the opening hand, in draw order
  #[inline]
  pub fn draws(&self, draws: usize) -> &[T] {
    self.slice(self.opening_hand_size, self.opening_hand_size + draws)
  }

  pub fn opening_hand_size(&self) -> usize {
    self.opening_hand_size
  }

  /// Returns the total number of cards in the deck
  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Returns the number of cards in the opening hand satisfying the predicate
  pub fn count_in_opening<P>(&self, p: P) -> usize
  where
    P: Fn(&T) -> bool,
  {
    self
      .opening()
      .iter()
      .fold(0, |count, card| if p(card) { count + 1 } else { count })
  }

  #[inline]
  fn slice(&self, from: usize, to: usize) -> &[T] {
    let to = std::cmp::min(to, self.order.len());
    &self.order[from..to]
  }
}

impl<T: PartialEq> DrawResult<T> {
  /// Returns the number of copies of `card` in the opening hand
  pub fn copies_in_opening(&self, card: &T) -> usize {
    self.count_in_opening(|c| c == card)
  }
}

/// Shuffles `deck` with `seed` and deals an opening hand of `hand_size`.
///
/// Oversized hands are capped at the deck length; dealing a nonzero hand from
/// an empty deck is an `InvalidArgument` error, matching [`crate::deal`].
pub fn simulate<T: Clone>(deck: &[T], seed: i64, hand_size: usize) -> Result<DrawResult<T>, Error> {
  if deck.is_empty() && hand_size > 0 {
    return Err(Error::InvalidArgument(format!(
      "cannot deal {} cards from an empty deck",
      hand_size
    )));
  }
  let order = shuffle(deck, seed);
  let opening_hand_size = std::cmp::min(hand_size, order.len());
  debug!(
    "simulated draw: deck_size={} seed={} opening_hand_size={}",
    order.len(),
    seed,
    opening_hand_size
  );
  Ok(DrawResult {
    order,
    opening_hand_size,
  })
}
