//! # Deck lists and card-count legality
//!
//! Host-side deck plumbing: parse a text deck list into counted entries,
//! flatten it into the ordered card sequence the engine consumes, and check
//! the card-count bounds a format imposes. Per-card copy limits and banlists
//! are deliberately not modeled here.
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// A deck as a sorted list of distinct cards with counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
  pub cards: Vec<DeckCard>,
  pub card_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckCard {
  pub name: String,
  pub count: usize,
}

/// Accumulates card counts before freezing them into a `Deck`
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
  cards: BTreeMap<String, usize>,
}

/// A deck list line that could not be understood
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad deck list: {0}")]
pub struct DecklistError(pub String);

/// Card-count bounds imposed by a format
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckBounds {
  pub min_size: usize,
  pub max_size: usize,
}

impl DeckBounds {
  /// The conventional constructed main-deck range
  pub fn standard() -> Self {
    Self {
      min_size: 40,
      max_size: 60,
    }
  }

  pub fn new(min_size: usize, max_size: usize) -> Self {
    Self { min_size, max_size }
  }
}

impl DeckBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(self, name: &str) -> Self {
    self.insert_count(name, 1)
  }

  pub fn insert_count(mut self, name: &str, count: usize) -> Self {
    let total_count = self.cards.entry(name.to_string()).or_insert(0);
    *total_count += count;
    Self { cards: self.cards }
  }

  pub fn build(self) -> Deck {
    let mut deck = Deck::new();
    let mut count = 0;
    for (name, card_count) in self.cards {
      count += card_count;
      deck.cards.push(DeckCard {
        name,
        count: card_count,
      });
    }
    deck.card_count = count;
    // Order must agree with the case-insensitive binary search in
    // card_count_from_name
    deck
      .cards
      .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    deck
  }
}

impl Deck {
  pub fn new() -> Self {
    Self {
      cards: Vec::with_capacity(20),
      card_count: 0,
    }
  }

  /// Parses a deck list of `N Card Name` lines.
  ///
  /// Lines beginning with `#` are comments; a blank line ends the main board
  /// and anything after it (a side board) is ignored, as is a `sideboard`
  /// divider word. A leading `deck` header word is skipped.
  pub fn from_list(list: &str) -> Result<Self, DecklistError> {
    lazy_static! {
      static ref LINE_REGEX: Regex =
        Regex::new(r"^(?P<amount>\d+)\s+(?P<name>[^#]+)").expect("Failed to compile LINE_REGEX");
    }
    let mut builder = DeckBuilder::new();
    for line in list.trim().lines() {
      let trimmed = line.trim();
      let trimmed_lower = trimmed.to_lowercase();
      // An empty line divides the main board cards from the side board cards
      if trimmed.is_empty() {
        break;
      }
      if trimmed_lower == "deck" {
        continue;
      }
      if trimmed_lower == "sideboard" {
        break;
      }
      // Ignore line comments
      if trimmed.starts_with('#') {
        debug!("skipping deck list comment: {}", trimmed);
        continue;
      }
      let caps = LINE_REGEX
        .captures(trimmed)
        .ok_or_else(|| DecklistError(format!("cannot parse deck list line: {}", line)))?;
      let amount = caps["amount"]
        .parse::<usize>()
        .map_err(|_| DecklistError(format!("cannot parse card amount from line: {}", line)))?;
      let name = caps["name"].trim();
      if name.is_empty() {
        return Err(DecklistError(format!(
          "missing card name on deck list line: {}",
          line
        )));
      }
      builder = builder.insert_count(name, amount);
    }
    Ok(builder.build())
  }

  /// Returns every card repeated by its count, the flat ordered sequence the
  /// shuffle and simulation entry points consume
  pub fn flatten(&self) -> Vec<&str> {
    let mut result = Vec::with_capacity(self.card_count);
    for deck_card in &self.cards {
      for _ in 0..deck_card.count {
        result.push(deck_card.name.as_str());
      }
    }
    result
  }

  pub fn card_count_from_name(&self, name: &str) -> Option<&DeckCard> {
    let name_lowercase = name.to_lowercase();
    let res = self
      .cards
      .binary_search_by(|probe| probe.name.to_lowercase().cmp(&name_lowercase));
    res.map(|idx| &self.cards[idx]).ok()
  }

  /// The card-count bounds legality check
  pub fn is_legal(&self, bounds: &DeckBounds) -> bool {
    self.card_count >= bounds.min_size && self.card_count <= bounds.max_size
  }

  pub fn len(&self) -> usize {
    self.card_count
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for Deck {
  fn default() -> Self {
    Self::new()
  }
}

#[macro_export]
macro_rules! decklist {
  ($list:expr) => {
    $crate::deck::Deck::from_list($list).unwrap_or_else(|_| panic!("Bad deck list"))
  };
}
