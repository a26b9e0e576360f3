//! # Goldfish: deterministic deck shuffle and draw probability library
//!
//! goldfish simulates the shuffle and opening hand draw for trading-card decks
//! and computes exact hypergeometric draw odds. It exists to power deck builder
//! "goldfishing" tools: give it a deck list and a seed, and it returns a
//! reproducible shuffled order, the opening hand, and the probability of seeing
//! the cards you care about. It knows nothing about HTTP, databases, or users.

#[macro_use]
extern crate serde_derive;
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate rand;
extern crate regex;
extern crate thiserror;

pub mod deck;
pub mod error;
pub mod probability;
pub mod rng;
pub mod shuffle;
pub mod simulation;

pub use crate::error::Error;
pub use crate::probability::{estimate, ProbabilityQuery, ProbabilityResult};
pub use crate::shuffle::{deal, shuffle, shuffle_in_place};
pub use crate::simulation::{simulate, DrawResult};
