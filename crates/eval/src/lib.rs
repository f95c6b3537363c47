// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Splitpot Poker hand evaluator.
//!
//! High hands evaluator for 5, 6 and 7 cards hands, based on the
//! [Cactus Kev's][kevlink] poker evaluator with an additional lookup table
//! for 6 and 7 cards hands, and an ace to five low evaluator for split pot
//! games.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use splitpot_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
//!
//! hands can also be parsed from their notation where a ten is either `T`
//! or `0`:
//!
//! ```
//! # use splitpot_eval::*;
//! let v = HandValue::eval_board("Ah Kh Qh Jh 0h 2c 3d").unwrap();
//! assert_eq!(v, HandValue::BEST);
//! assert_eq!(v.rank().to_string(), "Straight Flush");
//! ```
//!
//! the [low] module evaluates ace to five low hands given their ranks:
//!
//! ```
//! # use splitpot_eval::{*, low::*};
//! let ranks = ranks_from_notation(&["As", "2d", "3c", "4h", "5s"]).unwrap();
//! let low = LowRule::EightOrBetter.eval(&ranks).unwrap();
//! assert_eq!(low.value().map(|v| v.strength()), Some(1));
//! ```
//!
//! and the [split] module finds the best high and low hands made with two
//! hole cards and three board cards.
//!
//! All tables are read only after construction and the evaluation functions
//! can be called from any number of threads.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

pub mod low;
pub mod split;

mod error;
pub use error::EvalError;

// Reexport cards types.
pub use splitpot_cards::{
    Card, CardError, Deck, PRIMES, Rank, Suit, parse_cards, ranks_from_notation,
};
