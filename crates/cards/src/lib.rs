// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Splitpot Poker cards types.
//!
//! This crate define the cards codec, cards are created from a rank and a
//! suit or parsed from their two characters notation:
//!
//! ```
//! # use splitpot_cards::{Card, Rank, Suit};
//! let th = Card::new(Rank::Ten, Suit::Hearts);
//! assert_eq!("Th".parse(), Ok(th));
//! assert_eq!("0h".parse(), Ok(th));
//! assert_eq!(Card::from_id(th.id()), Ok(th));
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 7 cards hands:
//!
//! ```no_run
//! # use splitpot_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use splitpot_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number
//! of tasks, the following example uses 4 tasks to iterate all 5 cards hands,
//! the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use splitpot_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, PRIMES, Rank, Suit, parse_cards, ranks_from_notation};

mod deck;
pub use deck::{Deck, MAX_HAND_SIZE};

mod error;
pub use error::CardError;
