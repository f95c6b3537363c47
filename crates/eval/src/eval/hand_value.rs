// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value evaluation.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::{
    HandRank, eval7,
    tables::{FLUSHES, MAX_VALUE, MIN_VALUE, UNIQUE5},
};
use crate::{Card, CardError, EvalError, parse_cards};

/// The value of a 5, 6, or 7 cards Poker hand.
///
/// The strength of a hand is a number from 1 (royal flush) to 7462 (seven
/// high), a smaller strength is a better hand and hands with the same
/// strength are tied. The [Ord] implementation follows the hands order so
/// that a stronger hand compares greater:
///
/// ```
/// # use splitpot_eval::*;
/// let royal = HandValue::eval_board("Ah Kh Qh Jh Th").unwrap();
/// let quads = HandValue::eval_board("9c 9d 9h 9s 2c").unwrap();
/// assert_eq!(royal.strength(), 1);
/// assert_eq!(quads.rank(), HandRank::FourOfAKind);
/// assert!(royal > quads);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HandValue(u16);

impl HandValue {
    /// The best possible hand, a royal flush.
    pub const BEST: HandValue = HandValue(MIN_VALUE);

    /// The worst possible hand, seven high.
    pub const WORST: HandValue = HandValue(MAX_VALUE);

    /// Creates a value from a strength in `1..=7462`.
    pub fn from_strength(value: u16) -> Result<HandValue, EvalError> {
        HandRank::from_strength(value).map(|_| HandValue(value))
    }

    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// This doesn't check for duplicated cards, a hand with duplicated cards
    /// gets an unspecified value, use [HandValue::try_eval] for validation.
    ///
    /// Panics if the hand doesn't have 5, 6, or 7 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        match cards {
            [c1, c2, c3, c4, c5] => Self::eval5(c1.id(), c2.id(), c3.id(), c4.id(), c5.id()),
            [_, _, _, _, _, _] | [_, _, _, _, _, _, _] => Self::eval7(cards),
            _ => panic!("Invalid hand size {}", cards.len()),
        }
    }

    /// Evaluates a 5, 6, or 7 cards hand checking the hand size and that
    /// there are no duplicated cards.
    pub fn try_eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        if !(5..=7).contains(&cards.len()) {
            return Err(EvalError::UnsupportedHandSize(cards.len()));
        }

        check_distinct(cards)?;
        Ok(Self::eval(cards))
    }

    /// Evaluates a hand given as cards notation, i.e. `["Ah", "Ks", "0d"]`.
    pub fn eval_notation<S: AsRef<str>>(cards: &[S]) -> Result<HandValue, EvalError> {
        let cards = cards
            .iter()
            .map(|c| c.as_ref().parse())
            .collect::<Result<Vec<Card>, CardError>>()?;
        Self::try_eval(&cards)
    }

    /// Evaluates a whitespace separated board, i.e. `"Ah Ks Td 3c Ad"`.
    pub fn eval_board(board: &str) -> Result<HandValue, EvalError> {
        Self::try_eval(&parse_cards(board)?)
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns the best five cards,
    /// this is slower than [HandValue::eval] as it checks all 5 cards hands.
    ///
    /// Panics if the hand doesn't have 5, 6, or 7 cards.
    pub fn eval_with_best_hand(cards: &[Card]) -> (HandValue, [Card; 5]) {
        assert!(
            (5..=7).contains(&cards.len()),
            "Invalid hand size {}",
            cards.len()
        );

        let mut best_value = HandValue(u16::MAX);
        let mut best_hand = [cards[0]; 5];

        for_each_five(cards, |hand| {
            let value = Self::eval(hand);
            if best_value.0 > value.0 {
                best_value = value;
                best_hand.copy_from_slice(hand);
            }
        });

        (best_value, best_hand)
    }

    /// The hand strength, 1 is the best hand.
    #[inline]
    pub fn strength(&self) -> u16 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::classify(self.0)
    }

    #[inline]
    fn eval5(c1: u32, c2: u32, c3: u32, c4: u32, c5: u32) -> HandValue {
        let mask = ((c1 | c2 | c3 | c4 | c5) >> 16) as usize;

        // All five cards have the same suit bit.
        if c1 & c2 & c3 & c4 & c5 & 0xf000 != 0 {
            return HandValue(FLUSHES[mask]);
        }

        let unique = UNIQUE5[mask];
        if unique != 0 {
            return HandValue(unique);
        }

        let product = [c1, c2, c3, c4, c5]
            .iter()
            .map(|c| (c & 0xff) as u64)
            .product();
        HandValue(eval7::ranks_value(product).unwrap_or(MAX_VALUE))
    }

    fn eval7(cards: &[Card]) -> HandValue {
        let mut suits = [0u16; 4];
        let mut product = 1u64;

        for c in cards {
            suits[c.suit_bits().trailing_zeros() as usize & 3] |= c.rank_mask();
            product *= c.prime() as u64;
        }

        let value = eval7::ranks_value(product).unwrap_or(MAX_VALUE);

        // Only one suit can have five or more cards.
        match suits.iter().find(|m| m.count_ones() >= 5) {
            Some(&mask) => HandValue(FLUSHES[mask as usize].min(value)),
            None => HandValue(value),
        }
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller strength is a better hand.
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<u16> for HandValue {
    type Error = EvalError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        HandValue::from_strength(value)
    }
}

impl From<HandValue> for u16 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}

/// Fails with the first card that appears more than once.
pub(crate) fn check_distinct(cards: &[Card]) -> Result<(), EvalError> {
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(EvalError::DuplicateCard(*c));
        }
    }

    Ok(())
}

/// Calls `f` for each 5 cards subset of a 5, 6, or 7 cards hand.
fn for_each_five<F>(cards: &[Card], mut f: F)
where
    F: FnMut(&[Card]),
{
    let n = cards.len();
    let mut hand = [cards[0]; 5];

    // Pick the two positions left out, positions from n to 6 stand for the
    // cards a 5 or 6 cards hand doesn't have and must be all left out.
    for skip1 in 0..7 {
        for skip2 in (skip1 + 1)..7 {
            let missing = [skip1, skip2].iter().filter(|&&s| s >= n).count();
            if missing != 7 - n {
                continue;
            }

            let mut pos = 0;
            for (i, c) in cards.iter().enumerate() {
                if i != skip1 && i != skip2 {
                    hand[pos] = *c;
                    pos += 1;
                }
            }

            f(&hand);
        }
    }
}
