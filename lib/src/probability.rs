//! # Hypergeometric draw odds
//!
//! Answers the deck builder question "what are the odds my opening hand has at
//! least k copies of this card?" with the exact hypergeometric survival
//! function rather than a Monte Carlo estimate. Combinatorial terms are
//! computed in log space so deck sizes in the hundreds stay well clear of
//! `f64` overflow.
use crate::error::Error;

/// One "at least k successes in the opening hand" question.
///
/// Field names follow the distribution: a deck of `deck_size` cards contains
/// `copies` of the target card; `hand_size` cards are drawn without
/// replacement; we ask for `min_successes` or more of the target among them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityQuery {
  pub deck_size: usize,
  pub copies: usize,
  pub hand_size: usize,
  pub min_successes: usize,
}

/// P(X >= min_successes), always in `[0, 1]`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityResult {
  pub probability: f64,
}

/// Computes the exact probability of drawing at least `min_successes` copies.
///
/// `P(X >= k) = 1 - sum_{i=0}^{k-1} C(K,i) * C(N-K,n-i) / C(N,n)` with
/// N = deck_size, K = copies, n = hand_size. The trivial boundaries are
/// returned as exact constants: `k = 0` is certain and `k > min(K, n)` is
/// impossible, neither is left to floating-point cancellation.
pub fn estimate(query: &ProbabilityQuery) -> Result<ProbabilityResult, Error> {
  let n_deck = query.deck_size;
  let copies = query.copies;
  let hand = query.hand_size;
  let wanted = query.min_successes;
  if copies > n_deck {
    return Err(Error::InvalidArgument(format!(
      "copies ({}) exceeds deck size ({})",
      copies, n_deck
    )));
  }
  if hand > n_deck {
    return Err(Error::InvalidArgument(format!(
      "hand size ({}) exceeds deck size ({})",
      hand, n_deck
    )));
  }
  if wanted == 0 {
    return Ok(ProbabilityResult { probability: 1.0 });
  }
  if wanted > std::cmp::min(copies, hand) {
    return Ok(ProbabilityResult { probability: 0.0 });
  }
  let ln_total = ln_choose(n_deck, hand);
  let mut cdf = 0.0;
  for i in 0..wanted {
    // A hand with i copies needs hand - i cards from the rest of the deck
    if hand - i > n_deck - copies {
      continue;
    }
    cdf += (ln_choose(copies, i) + ln_choose(n_deck - copies, hand - i) - ln_total).exp();
  }
  let probability = (1.0 - cdf).max(0.0).min(1.0);
  Ok(ProbabilityResult { probability })
}

/// Natural log of the binomial coefficient C(n, k). Caller ensures k <= n.
fn ln_choose(n: usize, k: usize) -> f64 {
  debug_assert!(k <= n);
  ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

fn ln_factorial(n: usize) -> f64 {
  (2..=n).map(|v| (v as f64).ln()).sum()
}

#[cfg(test)]
mod tests {
  use crate::probability::*;

  fn p(deck_size: usize, copies: usize, hand_size: usize, min_successes: usize) -> f64 {
    estimate(&ProbabilityQuery {
      deck_size,
      copies,
      hand_size,
      min_successes,
    })
    .unwrap()
    .probability
  }

  #[test]
  fn zero_successes_is_certain() {
    assert_eq!(p(40, 3, 5, 0), 1.0);
    assert_eq!(p(0, 0, 0, 0), 1.0);
    assert_eq!(p(60, 0, 7, 0), 1.0);
  }

  #[test]
  fn more_than_available_is_impossible() {
    assert_eq!(p(40, 3, 5, 4), 0.0);
    assert_eq!(p(40, 3, 5, 6), 0.0);
    assert_eq!(p(40, 0, 5, 1), 0.0);
    assert_eq!(p(40, 10, 0, 1), 0.0);
  }

  #[test]
  fn three_ofs_in_a_40_card_deck() {
    // 1 - C(37,5)/C(40,5)
    assert!((p(40, 3, 5, 1) - 0.337_550_607_287_449).abs() < 1e-9);
  }

  #[test]
  fn singleton_in_a_40_card_deck() {
    // Exactly 5/40
    assert!((p(40, 1, 5, 1) - 0.125).abs() < 1e-9);
  }

  #[test]
  fn all_successes_guarantee_the_draw() {
    assert_eq!(p(40, 40, 5, 5), 1.0);
  }

  #[test]
  fn untapped_blue_sources_by_turn_one() {
    // 17 relevant lands in a 60 card deck, 7 card hand: the classic
    // mana-base reference number
    assert!((p(60, 17, 7, 1) - 0.916_562_567_030_13).abs() < 1e-9);
  }

  #[test]
  fn multi_copy_requirement() {
    assert!((p(60, 24, 7, 3) - 0.587_929_496_447_138).abs() < 1e-9);
    // 3/28 by direct enumeration
    assert!((p(8, 2, 3, 2) - 3.0 / 28.0).abs() < 1e-12);
  }

  #[test]
  fn monotone_non_increasing_in_min_successes() {
    let mut last = 1.0;
    for k in 0..=6 {
      let prob = p(40, 3, 5, k);
      assert!(prob <= last + 1e-12, "k={} rose from {} to {}", k, last, prob);
      last = prob;
    }
  }

  #[test]
  fn large_deck_does_not_overflow() {
    let prob = p(500, 60, 20, 1);
    assert!(prob > 0.0 && prob <= 1.0);
  }

  #[test]
  fn copies_exceeding_deck_size_is_an_error() {
    assert!(estimate(&ProbabilityQuery {
      deck_size: 40,
      copies: 41,
      hand_size: 5,
      min_successes: 1,
    })
    .is_err());
  }

  #[test]
  fn hand_exceeding_deck_size_is_an_error() {
    assert!(estimate(&ProbabilityQuery {
      deck_size: 40,
      copies: 3,
      hand_size: 41,
      min_successes: 1,
    })
    .is_err());
  }

  #[test]
  fn whole_deck_hand_sees_every_copy() {
    assert_eq!(p(40, 3, 40, 3), 1.0);
  }
}
