// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Compile time lookup tables indexed by a 13 bits ranks mask.
//!
//! Hand values are numbered from 1 (royal flush) to 7462 (seven high) and
//! each category takes a contiguous range of values:
//!
//! ```text
//!   Straight Flush     1 ..=   10    10 hands
//!   Four of a Kind    11 ..=  166   156 hands
//!   Full House       167 ..=  322   156 hands
//!   Flush            323 ..= 1599  1277 hands
//!   Straight        1600 ..= 1609    10 hands
//!   Three of a Kind 1610 ..= 2467   858 hands
//!   Two Pair        2468 ..= 3325   858 hands
//!   One Pair        3326 ..= 6185  2860 hands
//!   High Card       6186 ..= 7462  1277 hands
//! ```

/// The best hand value.
pub const MIN_VALUE: u16 = 1;

/// The worst hand value.
pub const MAX_VALUE: u16 = 7462;

/// The first value of each category from straight flush to high card.
pub const STRAIGHT_FLUSH: u16 = 1;
pub const FOUR_OF_A_KIND: u16 = 11;
pub const FULL_HOUSE: u16 = 167;
pub const FLUSH: u16 = 323;
pub const STRAIGHT: u16 = 1600;
pub const THREE_OF_A_KIND: u16 = 1610;
pub const TWO_PAIR: u16 = 2468;
pub const ONE_PAIR: u16 = 3326;
pub const HIGH_CARD: u16 = 6186;

/// Number of 13 bits ranks masks.
const NUM_MASKS: usize = 1 << 13;

/// Ranks masks of the straights from broadway down to the wheel.
pub const STRAIGHTS: [u16; 10] = [
    0x1f00, 0x0f80, 0x07c0, 0x03e0, 0x01f0, 0x00f8, 0x007c, 0x003e, 0x001f, 0x100f,
];

/// Flush values for masks with 5, 6, or 7 ranks bits, for more than five
/// ranks this is the value of the best five cards flush.
pub static FLUSHES: [u16; NUM_MASKS] = make_flushes();

/// Straight and high card values for masks with five ranks bits, zero for
/// all other masks.
pub static UNIQUE5: [u16; NUM_MASKS] = make_unique5();

/// Position of a mask in [STRAIGHTS].
const fn straight_index(mask: u16) -> Option<u16> {
    let mut i = 0;
    while i < STRAIGHTS.len() {
        if STRAIGHTS[i] == mask {
            return Some(i as u16);
        }
        i += 1;
    }

    None
}

/// Assigns values to all five ranks masks, straights get `straight + idx`
/// and the other masks get consecutive values from `other` in descending
/// mask order, a larger mask has higher cards.
const fn make_five_ranks(straight: u16, other: u16) -> [u16; NUM_MASKS] {
    let mut t = [0u16; NUM_MASKS];
    let mut next = other;
    let mut mask = NUM_MASKS;

    while mask > 0 {
        mask -= 1;
        if (mask as u16).count_ones() != 5 {
            continue;
        }

        t[mask] = match straight_index(mask as u16) {
            Some(idx) => straight + idx,
            None => {
                next += 1;
                next - 1
            }
        };
    }

    t
}

const fn make_flushes() -> [u16; NUM_MASKS] {
    let mut t = make_five_ranks(STRAIGHT_FLUSH, FLUSH);

    // Masks are visited in increasing order so that a mask with one bit
    // cleared has already been set.
    let mut mask = 0;
    while mask < NUM_MASKS {
        let bits = (mask as u16).count_ones();
        if bits == 6 || bits == 7 {
            let mut best = u16::MAX;
            let mut rest = mask;
            while rest != 0 {
                let bit = rest & rest.wrapping_neg();
                let value = t[mask & !bit];
                if value < best {
                    best = value;
                }
                rest &= !bit;
            }

            t[mask] = best;
        }

        mask += 1;
    }

    t
}

const fn make_unique5() -> [u16; NUM_MASKS] {
    make_five_ranks(STRAIGHT, HIGH_CARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(table: &[u16], bits: u32) -> Vec<u16> {
        let mut values = (0..NUM_MASKS)
            .filter(|m| m.count_ones() == bits)
            .map(|m| table[m])
            .collect::<Vec<_>>();
        values.sort_unstable();
        values
    }

    #[test]
    fn flushes_five_cards() {
        let values = values(&FLUSHES, 5);
        assert_eq!(values.len(), 1287);

        // Straight flushes and flushes are contiguous.
        let expected = (STRAIGHT_FLUSH..FOUR_OF_A_KIND)
            .chain(FLUSH..STRAIGHT)
            .collect::<Vec<_>>();
        assert_eq!(values, expected);

        // Royal flush, wheel, and the worst flush.
        assert_eq!(FLUSHES[0x1f00], 1);
        assert_eq!(FLUSHES[0x100f], 10);
        assert_eq!(FLUSHES[0x1e00 | 0x0080], FLUSH);
        assert_eq!(FLUSHES[0x002f], STRAIGHT - 1);
    }

    #[test]
    fn unique5_five_cards() {
        let values = values(&UNIQUE5, 5);
        let expected = (STRAIGHT..THREE_OF_A_KIND)
            .chain(HIGH_CARD..=MAX_VALUE)
            .collect::<Vec<_>>();
        assert_eq!(values, expected);

        assert_eq!(UNIQUE5[0x1f00], STRAIGHT);
        assert_eq!(UNIQUE5[0x100f], STRAIGHT + 9);
        assert_eq!(UNIQUE5[0x002f], MAX_VALUE);
        assert_eq!(UNIQUE5[0x003f], 0);
    }

    #[test]
    fn flushes_more_cards() {
        // Six hearts straight flush picks the higher straight.
        assert_eq!(FLUSHES[0x007e], FLUSHES[0x007c]);

        // Wheel plus a six is a six high straight flush.
        assert_eq!(FLUSHES[0x101f], FLUSHES[0x001f]);

        // Seven cards flush drops the two lowest cards.
        assert_eq!(FLUSHES[0x1a47], FLUSHES[0x1a44]);
        assert!(FLUSHES[0x1a47] > FLUSHES[0x1a48]);
    }
}
