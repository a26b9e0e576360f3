extern crate env_logger;
extern crate goldfish;
#[macro_use]
extern crate log;
extern crate serde;
extern crate serde_json;

use goldfish::deck::{Deck, DeckBounds};
use goldfish::probability::ProbabilityQuery;
use goldfish::{estimate, rng, simulate};
use serde_json::json;
use std::env;
use std::fs;

/// Reads a deck list, runs one seeded shuffle-and-draw, and prints the order,
/// the opening hand, and per-card opening hand odds as JSON.
///
/// Usage: goldfish <decklist-path> [seed] [hand-size]
///
/// Without a seed, one is drawn from OS entropy and echoed in the output so
/// the game can be replayed.
fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();
  let args: Vec<String> = env::args().collect();
  let path = args
    .get(1)
    .ok_or("usage: goldfish <decklist-path> [seed] [hand-size]")?;
  let seed = match args.get(2) {
    Some(raw) => raw.parse::<i64>()?,
    None => rng::random_seed(),
  };
  let hand_size = match args.get(3) {
    Some(raw) => raw.parse::<usize>()?,
    None => 5,
  };

  let list = fs::read_to_string(path)?;
  let deck = Deck::from_list(&list)?;
  info!("read {} cards ({} distinct) from {}", deck.len(), deck.cards.len(), path);

  let bounds = DeckBounds::standard();
  let legal = deck.is_legal(&bounds);
  if !legal {
    warn!(
      "deck has {} cards, outside the legal {}..={} range",
      deck.len(),
      bounds.min_size,
      bounds.max_size
    );
  }

  let cards = deck.flatten();
  let result = simulate(&cards, seed, hand_size)?;

  // Odds of at least one copy of each distinct card in the opening hand
  let mut odds = serde_json::Map::new();
  for deck_card in &deck.cards {
    let estimated = estimate(&ProbabilityQuery {
      deck_size: deck.len(),
      copies: deck_card.count,
      hand_size: result.opening_hand_size(),
      min_successes: 1,
    })?;
    odds.insert(deck_card.name.clone(), json!(estimated.probability));
  }

  let out = json!({
    "seed": seed,
    "legal": legal,
    "deckSize": result.len(),
    "openingHand": result.opening(),
    "order": result.order(),
    "openingHandOdds": odds,
  });
  println!("{}", serde_json::to_string_pretty(&out)?);
  Ok(())
}
