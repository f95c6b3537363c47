// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ace to five low hands evaluator.
//!
//! A low hand is five distinct ranks where the ace counts as one, straights
//! and flushes don't matter, and the hand with the lower highest rank wins,
//! ties are broken by the next highest rank and so on. A [LowRule] decides
//! which hands qualify, for example in eight or better games all ranks must
//! be eight or lower:
//!
//! ```
//! # use splitpot_eval::low::*;
//! let rule = LowRule::EightOrBetter;
//! let wheel = rule.eval(&[14, 5, 4, 3, 2]).unwrap();
//! let eight = rule.eval(&[8, 7, 6, 5, 4]).unwrap();
//! assert_eq!(wheel.value().map(|v| v.strength()), Some(1));
//! assert!(wheel > eight);
//!
//! let nine = rule.eval(&[9, 5, 4, 3, 2]).unwrap();
//! assert_eq!(nine, LowHand::NoQualifyingLow);
//! ```
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, sync::LazyLock};

use crate::{Card, EvalError};

/// The number of ranks in a low hand.
pub const LOW_HAND_SIZE: usize = 5;

/// The ace value in a low hand.
const ACE_LOW: u8 = 1;

/// The ace value in a high hand.
const ACE_HIGH: u8 = 14;

/// The lowest and highest qualifying ceilings.
const MIN_CEILING: u8 = 5;
const MAX_CEILING: u8 = 13;

/// Tables for all ceilings from 5 to 13.
static LOW_TABLES: LazyLock<Vec<LowTable>> =
    LazyLock::new(|| (MIN_CEILING..=MAX_CEILING).map(LowTable::new).collect());

/// The rule that decides which low hands qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LowRule {
    /// All ranks must be eight or lower.
    #[default]
    EightOrBetter,
    /// Any five distinct ranks qualify.
    AceToFive,
    /// All ranks must be lower or equal to the ceiling, with the ace as one
    /// and the king as 13, ceilings outside 5..=13 are clamped.
    Ceiling(u8),
}

impl LowRule {
    /// The highest rank of a qualifying hand, the ace is one.
    pub fn ceiling(&self) -> u8 {
        match self {
            LowRule::EightOrBetter => 8,
            LowRule::AceToFive => MAX_CEILING,
            LowRule::Ceiling(c) => (*c).clamp(MIN_CEILING, MAX_CEILING),
        }
    }

    /// The lookup table for this rule.
    pub fn table(&self) -> &'static LowTable {
        &LOW_TABLES[(self.ceiling() - MIN_CEILING) as usize]
    }

    /// Evaluates five ranks using this rule, see [LowTable::eval].
    pub fn eval(&self, ranks: &[u8]) -> Result<LowHand, EvalError> {
        self.table().eval(ranks)
    }
}

impl fmt::Display for LowRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowRule::EightOrBetter => f.write_str("eight or better"),
            LowRule::AceToFive => f.write_str("ace to five"),
            LowRule::Ceiling(_) => write!(f, "{} or better", self.ceiling()),
        }
    }
}

/// The strength of a qualifying low hand.
///
/// A strength of 1 is the wheel (5-4-3-2-A) and a smaller strength is a
/// better hand, the [Ord] implementation compares a better hand greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LowValue(u16);

impl LowValue {
    /// The hand strength, 1 is the best hand.
    pub fn strength(&self) -> u16 {
        self.0
    }
}

impl Ord for LowValue {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for LowValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The result of a low hand evaluation.
///
/// Variants are declared so that any qualifying hand compares greater than
/// a hand that doesn't qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LowHand {
    /// The hand has duplicated ranks or ranks above the rule ceiling.
    NoQualifyingLow,
    /// A qualifying low hand.
    Qualified(LowValue),
}

impl LowHand {
    /// Checks if this is a qualifying low.
    pub fn is_qualified(&self) -> bool {
        matches!(self, LowHand::Qualified(_))
    }

    /// The low value if the hand qualifies.
    pub fn value(&self) -> Option<LowValue> {
        match self {
            LowHand::Qualified(v) => Some(*v),
            LowHand::NoQualifyingLow => None,
        }
    }
}

impl fmt::Display for LowHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowHand::Qualified(v) => write!(f, "{v}"),
            LowHand::NoQualifyingLow => f.write_str("no low"),
        }
    }
}

/// The sorted table of all qualifying low hands for a ceiling.
///
/// Each hand is keyed by its ranks sorted in descending order and packed
/// four bits per rank, the numeric order of the keys is the hands order so
/// that the position of a key in the sorted table is the hand strength.
#[derive(Debug)]
pub struct LowTable {
    ceiling: u8,
    hands: Vec<[u8; LOW_HAND_SIZE]>,
    strengths: AHashMap<u32, u16>,
}

impl LowTable {
    fn new(ceiling: u8) -> Self {
        let mut hands = Vec::new();
        let mut hand = [0u8; LOW_HAND_SIZE];
        for_each_distinct(&mut hand, 0, ceiling, &mut |h| hands.push(*h));

        hands.sort_unstable_by_key(pack);

        let strengths = hands
            .iter()
            .enumerate()
            .map(|(idx, h)| (pack(h), idx as u16 + 1))
            .collect::<AHashMap<_, _>>();

        debug!("Built low table for ceiling {ceiling} with {} hands", hands.len());

        Self {
            ceiling,
            hands,
            strengths,
        }
    }

    /// The highest qualifying rank.
    pub fn ceiling(&self) -> u8 {
        self.ceiling
    }

    /// The number of qualifying hands.
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Checks if there are no qualifying hands.
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// Evaluates five ranks in 1..=14, where both 1 and 14 are an ace.
    ///
    /// Fails if there are not exactly five ranks or a rank is out of range.
    pub fn eval(&self, ranks: &[u8]) -> Result<LowHand, EvalError> {
        let mut hand: [u8; LOW_HAND_SIZE] = ranks
            .try_into()
            .map_err(|_| EvalError::InvalidRankInput)?;

        for r in hand.iter_mut() {
            match *r {
                ACE_HIGH => *r = ACE_LOW,
                ACE_LOW..ACE_HIGH => {}
                _ => return Err(EvalError::InvalidRankInput),
            }
        }

        hand.sort_unstable_by(|a, b| b.cmp(a));

        Ok(match self.strengths.get(&pack(&hand)) {
            Some(&strength) => LowHand::Qualified(LowValue(strength)),
            None => LowHand::NoQualifyingLow,
        })
    }

    /// Evaluates five cards.
    pub fn eval_cards(&self, cards: &[Card]) -> Result<LowHand, EvalError> {
        if cards.len() != LOW_HAND_SIZE {
            return Err(EvalError::InvalidRankInput);
        }

        let mut ranks = [0u8; LOW_HAND_SIZE];
        for (r, c) in ranks.iter_mut().zip(cards) {
            *r = c.rank().value();
        }

        self.eval(&ranks)
    }

    /// The ranks in descending order for a low value, aces are one.
    pub fn hand(&self, value: LowValue) -> Option<[u8; LOW_HAND_SIZE]> {
        let idx = (value.0 as usize).checked_sub(1)?;
        self.hands.get(idx).copied()
    }
}

/// Calls `f` with all sets of distinct ranks in 1..=ceiling, the ranks in
/// `hand[pos..]` are filled in descending order below `hand[pos - 1]`.
fn for_each_distinct<F>(hand: &mut [u8; LOW_HAND_SIZE], pos: usize, ceiling: u8, f: &mut F)
where
    F: FnMut(&[u8; LOW_HAND_SIZE]),
{
    if pos == LOW_HAND_SIZE {
        f(hand);
        return;
    }

    let top = if pos == 0 { ceiling } else { hand[pos - 1] - 1 };
    for rank in (ACE_LOW..=top).rev() {
        hand[pos] = rank;
        for_each_distinct(hand, pos + 1, ceiling, f);
    }
}

/// Packs descending ranks into an integer that sorts like the hands.
fn pack(hand: &[u8; LOW_HAND_SIZE]) -> u32 {
    hand.iter().fold(0, |key, &r| (key << 4) | r as u32)
}
