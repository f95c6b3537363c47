// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card, rank and suit types and the card notation codec.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// Primes used to encode a card rank.
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// The product of the primes of a hand identifies its ranks multiset, the
/// suit nibbles are disjoint so that AND-ing five cards tells if they are
/// suited, and OR-ing the rank bits gives the ranks mask used for straights.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u32);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        let (rank, suit) = (rank as u32, suit as u32);
        Self(PRIMES[rank as usize] | (rank << 8) | (suit << 12) | (1 << (rank + 16)))
    }

    /// Decodes a card code, fails if the code was not created by [Card::new].
    pub fn from_id(id: u32) -> Result<Card, CardError> {
        let rank = (id >> 8) & 0xf;
        let suit = Suit::from_bits(((id >> 12) & 0xf) as u8);

        match (Rank::from_index(rank as u8), suit) {
            (Some(rank), Some(suit)) if Card::new(rank, suit).0 == id => Ok(Card::new(rank, suit)),
            _ => Err(CardError::InvalidCode(id)),
        }
    }

    /// This card unique id.
    #[inline]
    pub const fn id(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match Suit::from_bits(self.suit_bits()) {
            Some(suit) => suit,
            None => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::from_index(self.rank_bits()) {
            Some(rank) => rank,
            None => panic!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the card rank and suit.
    pub fn decode(&self) -> (Rank, Suit) {
        (self.rank(), self.suit())
    }

    /// Returns the rank bits.
    #[inline]
    pub const fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }

    /// Returns the rank prime.
    #[inline]
    pub const fn prime(&self) -> u32 {
        self.0 & 0xff
    }

    /// Returns the 13 bits rank mask with only this card rank bit set.
    #[inline]
    pub const fn rank_mask(&self) -> u16 {
        (self.0 >> 16) as u16
    }
}

impl TryFrom<u32> for Card {
    type Error = CardError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Card::from_id(id)
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card notation like `"Ah"`, `"td"`, `"0S"`, or `"10c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidNotation(s.to_string());

        let mut chars = s.chars();
        let (rank, suit) = match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None, None) => (Rank::from_char(r), Suit::from_char(s)),
            // Legacy two digits ten.
            (Some('1'), Some('0'), Some(s), None) => (Some(Rank::Ten), Suit::from_char(s)),
            _ => return Err(invalid()),
        };

        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Card::new(rank, suit)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Parses a whitespace separated list of cards, i.e. `"Ah Ks Td 3c Ad"`.
pub fn parse_cards(board: &str) -> Result<Vec<Card>, CardError> {
    board.split_whitespace().map(str::parse).collect()
}

/// Converts cards notation to rank values, Ace is 14 and Ten is 10.
///
/// ```
/// # use splitpot_cards::ranks_from_notation;
/// let ranks = ranks_from_notation(&["AS", "2c", "3D", "0h", "TS"]).unwrap();
/// assert_eq!(ranks, vec![14, 2, 3, 10, 10]);
/// ```
pub fn ranks_from_notation<S: AsRef<str>>(cards: &[S]) -> Result<Vec<u8>, CardError> {
    cards
        .iter()
        .map(|c| c.as_ref().parse::<Card>().map(|c| c.rank().value()))
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank for an index in 0 (deuce) to 12 (ace).
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 13 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// The rank for a face value in 2 to 14 (ace).
    pub const fn from_value(value: u8) -> Option<Rank> {
        if value >= 2 {
            Self::from_index(value - 2)
        } else {
            None
        }
    }

    /// The face value from 2 to 14, aces are high.
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Parses a rank character, ten can be either `T` or `0`.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' | '0' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit for the card encoding suit nibble.
    pub const fn from_bits(bits: u8) -> Option<Suit> {
        match bits {
            0x8 => Some(Suit::Clubs),
            0x4 => Some(Suit::Diamonds),
            0x2 => Some(Suit::Hearts),
            0x1 => Some(Suit::Spades),
            _ => None,
        }
    }

    /// Parses a suit character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}
