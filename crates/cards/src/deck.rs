// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck and hands enumeration.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// The max number of cards in an enumerated hand.
pub const MAX_HAND_SIZE: usize = 7;

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` when the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the cards positions in
    /// the deck.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=MAX_HAND_SIZE).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; MAX_HAND_SIZE];
        for (i, p) in pos.iter_mut().enumerate() {
            *p = i;
        }

        self.visit_from(k, &mut pos, usize::MAX, f);
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn sample<F>(&self, samples: usize, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=MAX_HAND_SIZE).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut rng = rand::rng();
        let mut hand = [Card::new(Rank::Ace, Suit::Spades); MAX_HAND_SIZE];
        for _ in 0..samples {
            for (c, h) in self.cards.choose_multiple(&mut rng, k).zip(&mut hand) {
                *h = *c;
            }

            f(&hand[..k]);
        }
    }

    /// Visits at most `count` hands starting from the combination in `pos`.
    fn visit_from<F>(&self, k: usize, pos: &mut [usize; MAX_HAND_SIZE], count: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        let mut hand = [Card::new(Rank::Ace, Suit::Spades); MAX_HAND_SIZE];
        let mut changed = 0;
        let mut visited = 0;

        while visited < count {
            for i in changed..k {
                hand[i] = self.cards[pos[i]];
            }

            f(&hand[..k]);
            visited += 1;

            match next_combination(&mut pos[..k], n) {
                Some(i) => changed = i,
                None => break,
            }
        }
    }
}

/// Advances `pos` to the next k-combination of 0..n in lexicographic order.
///
/// Returns the first position that changed or `None` after the last one.
fn next_combination(pos: &mut [usize], n: usize) -> Option<usize> {
    let k = pos.len();
    let i = (0..k).rev().find(|&i| pos[i] < n - k + i)?;

    pos[i] += 1;
    for j in (i + 1)..k {
        pos[j] = pos[j - 1] + 1;
    }

    Some(i)
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn next_combination_order() {
        let mut pos = [0, 1, 2];
        let mut all = vec![pos];
        while next_combination(&mut pos, 5).is_some() {
            all.push(pos);
        }

        assert_eq!(all.len(), 10);
        assert_eq!(all[1], [0, 1, 3]);
        assert_eq!(all[3], [0, 2, 3]);
        assert_eq!(all[9], [2, 3, 4]);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    // Goes through 133M hands, slow in debug mode.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();

        let mut count = 0;
        deck.sample(100, 7, |cards| {
            assert_eq!(cards.len(), 7);
            let unique = cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut dealt = HashSet::default();
        while let Some(card) = deck.deal() {
            dealt.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(dealt.len(), Deck::SIZE);
        assert_eq!(deck.deal(), None);
    }
}
