// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranks table for 5, 6, and 7 cards hands.
//!
//! Without a flush a hand value depends only on its ranks multiset, the
//! product of the ranks primes identifies the multiset so this table maps
//! the primes product of any 5, 6, or 7 ranks multiset to the value of the
//! best 5 cards hand in it (straights included, flushes excluded).
use ahash::AHashMap;
use log::debug;
use std::{sync::LazyLock, time::Instant};

use super::tables::{
    FLUSH, FOUR_OF_A_KIND, FULL_HOUSE, HIGH_CARD, ONE_PAIR, THREE_OF_A_KIND, TWO_PAIR, UNIQUE5,
};
use crate::PRIMES;

/// Number of distinct ranks multisets with 5 to 7 ranks and at most four
/// cards for each rank.
const TABLE_SIZE: usize = 6175 + 18_395 + 49_205;

static RANKS_TABLE: LazyLock<AHashMap<u64, u16>> = LazyLock::new(build_table);

/// Returns the best value for a ranks multiset primes product, `None` if
/// the product is not a 5 to 7 ranks multiset with at most four of a kind.
#[inline]
pub fn ranks_value(product: u64) -> Option<u16> {
    RANKS_TABLE.get(&product).copied()
}

/// Forces the table construction.
pub fn init() {
    LazyLock::force(&RANKS_TABLE);
}

fn build_table() -> AHashMap<u64, u16> {
    let now = Instant::now();
    let mut table = AHashMap::with_capacity(TABLE_SIZE);

    insert_five_ranks(&mut table);

    // Six and seven ranks get the best value of their five ranks subsets,
    // a subset product is the multiset product divided by the dropped primes.
    for_each_multiset(6, |ranks| {
        let product = product(ranks);
        let best = ranks
            .iter()
            .filter_map(|&r| table.get(&(product / prime(r))).copied())
            .min();

        if let Some(best) = best {
            table.insert(product, best);
        }
    });

    for_each_multiset(7, |ranks| {
        let product = product(ranks);
        let mut best = u16::MAX;

        for (i, &r1) in ranks.iter().enumerate() {
            for &r2 in &ranks[i + 1..] {
                if let Some(&v) = table.get(&(product / (prime(r1) * prime(r2)))) {
                    best = best.min(v);
                }
            }
        }

        table.insert(product, best);
    });

    debug!(
        "Built ranks table with {} entries in {:.3}ms",
        table.len(),
        now.elapsed().as_secs_f64() * 1000.0
    );

    table
}

/// Inserts all five ranks multisets in the table.
fn insert_five_ranks(table: &mut AHashMap<u64, u16>) {
    // Five distinct ranks: straights and high cards.
    for mask in 0..(1u16 << 13) {
        if mask.count_ones() == 5 {
            let ranks = (0..13).filter(|r| mask & (1 << r) != 0);
            table.insert(ranks.map(prime).product(), UNIQUE5[mask as usize]);
        }
    }

    // Ranks from ace down to deuce.
    let desc = || (0..13u8).rev();

    let mut value = FOUR_OF_A_KIND;
    for quads in desc() {
        for kicker in desc().filter(|&k| k != quads) {
            table.insert(prime(quads).pow(4) * prime(kicker), value);
            value += 1;
        }
    }

    debug_assert_eq!(value, FULL_HOUSE);
    for trips in desc() {
        for pair in desc().filter(|&p| p != trips) {
            table.insert(prime(trips).pow(3) * prime(pair).pow(2), value);
            value += 1;
        }
    }

    // Flushes and straights are in between.
    debug_assert_eq!(value, FLUSH);
    let mut value = THREE_OF_A_KIND;
    for trips in desc() {
        for k1 in desc().filter(|&k| k != trips) {
            for k2 in desc().filter(|&k| k < k1 && k != trips) {
                table.insert(prime(trips).pow(3) * prime(k1) * prime(k2), value);
                value += 1;
            }
        }
    }

    debug_assert_eq!(value, TWO_PAIR);
    for high in desc() {
        for low in desc().filter(|&l| l < high) {
            for kicker in desc().filter(|&k| k != high && k != low) {
                let product = prime(high).pow(2) * prime(low).pow(2) * prime(kicker);
                table.insert(product, value);
                value += 1;
            }
        }
    }

    debug_assert_eq!(value, ONE_PAIR);
    for pair in desc() {
        for k1 in desc().filter(|&k| k != pair) {
            for k2 in desc().filter(|&k| k < k1 && k != pair) {
                for k3 in desc().filter(|&k| k < k2 && k != pair) {
                    let product = prime(pair).pow(2) * prime(k1) * prime(k2) * prime(k3);
                    table.insert(product, value);
                    value += 1;
                }
            }
        }
    }

    debug_assert_eq!(value, HIGH_CARD);
}

/// Calls `f` with the sorted ranks of each multiset of `n` ranks with at
/// most four cards for each rank.
fn for_each_multiset<F>(n: usize, mut f: F)
where
    F: FnMut(&[u8]),
{
    fn visit<F: FnMut(&[u8])>(ranks: &mut Vec<u8>, n: usize, from: u8, f: &mut F) {
        if ranks.len() == n {
            f(ranks);
            return;
        }

        for rank in from..13 {
            // At most four cards of the same rank, the ranks are sorted so
            // only the last four can be equal.
            let count = ranks.iter().rev().take_while(|&&r| r == rank).count();
            if count < 4 {
                ranks.push(rank);
                visit(ranks, n, rank, f);
                ranks.pop();
            }
        }
    }

    let mut ranks = Vec::with_capacity(n);
    visit(&mut ranks, n, 0, &mut f);
}

#[inline]
fn prime(rank: u8) -> u64 {
    PRIMES[rank as usize] as u64
}

fn product(ranks: &[u8]) -> u64 {
    ranks.iter().map(|&r| prime(r)).product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::tables::{MAX_VALUE, STRAIGHT};

    #[test]
    fn multisets_count() {
        for (n, expected) in [(5, 6175), (6, 18_395), (7, 49_205)] {
            let mut count = 0;
            for_each_multiset(n, |ranks| {
                assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
                count += 1;
            });
            assert_eq!(count, expected, "n={n}");
        }
    }

    #[test]
    fn ranks_table_size() {
        init();
        assert_eq!(RANKS_TABLE.len(), TABLE_SIZE);

        let mut five = RANKS_TABLE
            .iter()
            .filter(|&(&p, _)| {
                let mut n = 0;
                let mut p = p;
                for r in 0..13 {
                    while p % prime(r) == 0 {
                        p /= prime(r);
                        n += 1;
                    }
                }
                n == 5
            })
            .map(|(_, &v)| v)
            .collect::<Vec<_>>();
        five.sort_unstable();

        // All non flush values are used exactly once.
        let expected = (FOUR_OF_A_KIND..FLUSH)
            .chain(STRAIGHT..=MAX_VALUE)
            .collect::<Vec<_>>();
        assert_eq!(five, expected);
    }

    #[test]
    fn ranks_values() {
        // Aces full of kings: AAAKK.
        let aces_full = prime(12).pow(3) * prime(11).pow(2);
        assert_eq!(ranks_value(aces_full), Some(FULL_HOUSE));

        // Seven high: 75432.
        assert_eq!(ranks_value(product(&[5, 3, 2, 1, 0])), Some(MAX_VALUE));

        // Nine high with two extra deuces is a pair of deuces.
        let v = ranks_value(product(&[7, 5, 3, 2, 1, 0, 0])).unwrap();
        assert!((ONE_PAIR..HIGH_CARD).contains(&v));

        // Three pairs plays the two highest pairs with the best kicker.
        let three_pairs = ranks_value(product(&[12, 12, 11, 11, 10, 10, 9])).unwrap();
        let two_pairs = ranks_value(product(&[12, 12, 11, 11, 10])).unwrap();
        assert_eq!(three_pairs, two_pairs);

        // Two trips make a full house.
        let v = ranks_value(product(&[12, 12, 12, 11, 11, 11, 0])).unwrap();
        assert_eq!(v, FULL_HOUSE);

        // Five of a kind doesn't exist.
        assert_eq!(ranks_value(prime(12).pow(5)), None);
    }
}
