// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator uses the [Cactus Kev's][kevlink] cards encoding to
//! evaluate 5, 6, and 7 cards poker hands:
//!
//! - flushes are resolved with a table indexed by the suited ranks mask that
//!   is computed at compile time and already holds the best five cards for
//!   six and seven suited ranks,
//! - five distinct ranks (straights and high cards) use a second compile
//!   time table indexed by the ranks mask,
//! - everything else goes through a table that maps the primes product of
//!   the 5, 6, or 7 ranks to the value of the best five cards, built once on
//!   first use.
//!
//! It provides a [HandValue::eval] method that computes a hand rank without
//! extracting the best hand out of a 7 cards hand, useful for computing odds
//! and other stats, and a slower [HandValue::eval_with_best_hand] that
//! computes the hand rank and returns the five best cards, useful for UIs to
//! shows a winning hand.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
mod eval7;
mod hand_rank;
mod hand_value;
mod tables;

pub use hand_rank::HandRank;
pub use hand_value::HandValue;
pub(crate) use hand_value::check_distinct;
pub use tables::{MAX_VALUE, MIN_VALUE};

/// Builds the lookup tables, evaluation builds them on first use so calling
/// this is only needed to avoid the first evaluation latency.
pub fn init() {
    eval7::init();
}
