// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::{fmt, ops::RangeInclusive};

use super::tables::{
    FLUSH, FOUR_OF_A_KIND, FULL_HOUSE, HIGH_CARD, MAX_VALUE, MIN_VALUE, ONE_PAIR, STRAIGHT,
    THREE_OF_A_KIND, TWO_PAIR,
};
use crate::EvalError;

/// The category of a Poker hand, a greater rank is a stronger category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair, straight, or flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
}

impl HandRank {
    /// Number of hand ranks.
    pub const COUNT: usize = 9;

    /// Returns all ranks from the strongest to the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }

    /// Classifies a hand strength value, fails if the value is not in
    /// `1..=7462`.
    pub fn from_strength(value: u16) -> Result<HandRank, EvalError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self::classify(value))
        } else {
            Err(EvalError::OutOfRange(value))
        }
    }

    /// Classifies a value known to be in range.
    pub(crate) const fn classify(value: u16) -> HandRank {
        if value >= HIGH_CARD {
            HandRank::HighCard
        } else if value >= ONE_PAIR {
            HandRank::OnePair
        } else if value >= TWO_PAIR {
            HandRank::TwoPair
        } else if value >= THREE_OF_A_KIND {
            HandRank::ThreeOfAKind
        } else if value >= STRAIGHT {
            HandRank::Straight
        } else if value >= FLUSH {
            HandRank::Flush
        } else if value >= FULL_HOUSE {
            HandRank::FullHouse
        } else if value >= FOUR_OF_A_KIND {
            HandRank::FourOfAKind
        } else {
            HandRank::StraightFlush
        }
    }

    /// The strength values of the hands in this category.
    pub const fn strength_range(&self) -> RangeInclusive<u16> {
        match self {
            HandRank::StraightFlush => MIN_VALUE..=FOUR_OF_A_KIND - 1,
            HandRank::FourOfAKind => FOUR_OF_A_KIND..=FULL_HOUSE - 1,
            HandRank::FullHouse => FULL_HOUSE..=FLUSH - 1,
            HandRank::Flush => FLUSH..=STRAIGHT - 1,
            HandRank::Straight => STRAIGHT..=THREE_OF_A_KIND - 1,
            HandRank::ThreeOfAKind => THREE_OF_A_KIND..=TWO_PAIR - 1,
            HandRank::TwoPair => TWO_PAIR..=ONE_PAIR - 1,
            HandRank::OnePair => ONE_PAIR..=HIGH_CARD - 1,
            HandRank::HighCard => HIGH_CARD..=MAX_VALUE,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match self {
            HandRank::StraightFlush => "Straight Flush",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::FullHouse => "Full House",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::TwoPair => "Two Pair",
            HandRank::OnePair => "One Pair",
            HandRank::HighCard => "High Card",
        };

        f.write_str(desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        let cases = [
            (1, HandRank::StraightFlush),
            (10, HandRank::StraightFlush),
            (11, HandRank::FourOfAKind),
            (166, HandRank::FourOfAKind),
            (167, HandRank::FullHouse),
            (322, HandRank::FullHouse),
            (323, HandRank::Flush),
            (1599, HandRank::Flush),
            (1600, HandRank::Straight),
            (1609, HandRank::Straight),
            (1610, HandRank::ThreeOfAKind),
            (2467, HandRank::ThreeOfAKind),
            (2468, HandRank::TwoPair),
            (3325, HandRank::TwoPair),
            (3326, HandRank::OnePair),
            (6185, HandRank::OnePair),
            (6186, HandRank::HighCard),
            (7462, HandRank::HighCard),
        ];

        for (value, rank) in cases {
            assert_eq!(HandRank::from_strength(value), Ok(rank), "{value}");
        }
    }

    #[test]
    fn classify_out_of_range() {
        assert_eq!(HandRank::from_strength(0), Err(EvalError::OutOfRange(0)));
        assert_eq!(
            HandRank::from_strength(7463),
            Err(EvalError::OutOfRange(7463))
        );
        assert!(HandRank::from_strength(u16::MAX).is_err());
    }

    #[test]
    fn classify_is_monotonic() {
        let mut prev = HandRank::StraightFlush;
        for value in MIN_VALUE..=MAX_VALUE {
            let rank = HandRank::from_strength(value).unwrap();
            assert!(rank <= prev, "{value}");
            assert!(rank.strength_range().contains(&value));
            prev = rank;
        }
    }

    #[test]
    fn ranges_partition_values() {
        let mut next = MIN_VALUE;
        let mut sizes = vec![];
        for rank in HandRank::ranks() {
            let range = rank.strength_range();
            assert_eq!(*range.start(), next);
            sizes.push(range.len());
            next = range.end() + 1;
        }

        assert_eq!(next, MAX_VALUE + 1);
        assert_eq!(sizes, [10, 156, 156, 1277, 10, 858, 858, 2860, 1277]);
    }

    #[test]
    fn rank_description() {
        assert_eq!(HandRank::FullHouse.to_string(), "Full House");
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
        assert!(HandRank::StraightFlush > HandRank::FourOfAKind);
        assert!(HandRank::OnePair > HandRank::HighCard);
    }
}
