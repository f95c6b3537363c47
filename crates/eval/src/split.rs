// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Split pot hands made from exactly two hole cards and three board cards.
//!
//! ```
//! # use splitpot_eval::{split::*, low::LowRule, parse_cards, HandRank};
//! let hole = parse_cards("Ah 2h Ks Kd").unwrap();
//! let board = parse_cards("Kh 5h 9c 3h 4d").unwrap();
//!
//! // Nut flush with the two hole hearts.
//! let high = best_high(&hole, &board).unwrap();
//! assert_eq!(high.value.rank(), HandRank::Flush);
//!
//! let low = best_low(&hole, &board, LowRule::EightOrBetter).unwrap().unwrap();
//! assert_eq!(low.value.strength(), 1);
//! ```
use serde::{Deserialize, Serialize};

use crate::{
    Card, EvalError, HandValue,
    eval::check_distinct,
    low::{LowHand, LowRule, LowValue},
};

/// Number of hole cards used in a split pot hand.
pub const HOLE_CARDS: usize = 2;

/// Number of board cards used in a split pot hand.
pub const BOARD_CARDS: usize = 3;

/// The best high hand made with two hole cards and three board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitHigh {
    /// The hand value.
    pub value: HandValue,
    /// The hole cards used.
    pub hole: [Card; HOLE_CARDS],
    /// The board cards used.
    pub board: [Card; BOARD_CARDS],
}

/// The best low hand made with two hole cards and three board cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLow {
    /// The low value.
    pub value: LowValue,
    /// The hole cards used.
    pub hole: [Card; HOLE_CARDS],
    /// The board cards used.
    pub board: [Card; BOARD_CARDS],
}

/// Returns the best high hand with exactly two hole and three board cards.
pub fn best_high(hole: &[Card], board: &[Card]) -> Result<SplitHigh, EvalError> {
    check_cards(hole, board)?;

    let mut best: Option<SplitHigh> = None;
    for_each_hand(hole, board, |h, b| {
        let value = HandValue::eval(&[h[0], h[1], b[0], b[1], b[2]]);
        if best.is_none_or(|best| value > best.value) {
            best = Some(SplitHigh {
                value,
                hole: h,
                board: b,
            });
        }
    });

    // There is always at least one hand after the size checks.
    best.ok_or(EvalError::NotEnoughCards)
}

/// Returns the best qualifying low with exactly two hole and three board
/// cards, or `None` if no combination qualifies.
pub fn best_low(
    hole: &[Card],
    board: &[Card],
    rule: LowRule,
) -> Result<Option<SplitLow>, EvalError> {
    check_cards(hole, board)?;

    let table = rule.table();
    let mut best: Option<SplitLow> = None;
    let mut result = Ok(());

    for_each_hand(hole, board, |h, b| {
        match table.eval_cards(&[h[0], h[1], b[0], b[1], b[2]]) {
            Ok(LowHand::Qualified(value)) => {
                if best.is_none_or(|best| value > best.value) {
                    best = Some(SplitLow {
                        value,
                        hole: h,
                        board: b,
                    });
                }
            }
            Ok(LowHand::NoQualifyingLow) => {}
            Err(e) => result = Err(e),
        }
    });

    result.map(|_| best)
}

fn check_cards(hole: &[Card], board: &[Card]) -> Result<(), EvalError> {
    if hole.len() < HOLE_CARDS || board.len() < BOARD_CARDS {
        return Err(EvalError::NotEnoughCards);
    }

    let all = hole.iter().chain(board).copied().collect::<Vec<_>>();
    check_distinct(&all)
}

/// Calls `f` for each pair of hole cards and triple of board cards.
fn for_each_hand<F>(hole: &[Card], board: &[Card], mut f: F)
where
    F: FnMut([Card; HOLE_CARDS], [Card; BOARD_CARDS]),
{
    for (i, &h1) in hole.iter().enumerate() {
        for &h2 in &hole[i + 1..] {
            for (j, &b1) in board.iter().enumerate() {
                for (k, &b2) in board.iter().enumerate().skip(j + 1) {
                    for &b3 in &board[k + 1..] {
                        f([h1, h2], [b1, b2, b3]);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandRank, parse_cards};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn hands_count() {
        let mut count = 0;
        for_each_hand(&cards("Ah Kh Qh Jh"), &cards("2c 3c 4c 5c 6c"), |_, _| {
            count += 1
        });
        assert_eq!(count, 6 * 10);
    }

    #[test]
    fn uses_exactly_two_hole_cards() {
        // Four spades on board and one in the hole is not a flush.
        let hole = cards("As Kd 7h 7c");
        let board = cards("2s 5s 9s Js 3d");
        let high = best_high(&hole, &board).unwrap();
        assert_eq!(high.value.rank(), HandRank::OnePair);
        assert_eq!(high.value, HandValue::eval_board("7h 7c Js 9s 5s").unwrap());

        // Board quads only count as trips.
        let hole = cards("Ah Kd");
        let board = cards("9s 9h 9d 9c 3d");
        let high = best_high(&hole, &board).unwrap();
        assert_eq!(high.value.rank(), HandRank::ThreeOfAKind);
        assert_eq!(high.hole.len(), 2);
    }

    #[test]
    fn best_low_hand() {
        let hole = cards("Ah 2d Kc Kd");
        let board = cards("3s 4h 8c Qd Js");
        let low = best_low(&hole, &board, LowRule::EightOrBetter)
            .unwrap()
            .unwrap();
        assert_eq!(LowRule::EightOrBetter.table().hand(low.value), Some([8, 4, 3, 2, 1]));

        // Only two board cards qualify.
        let board = cards("3s 9h Tc Qd Js");
        assert_eq!(best_low(&hole, &board, LowRule::EightOrBetter), Ok(None));

        // The board pairs both hole cards and the wheel still plays.
        let hole = cards("Ah 2d");
        let board = cards("As 2h 3c 4d 5s");
        let low = best_low(&hole, &board, LowRule::EightOrBetter)
            .unwrap()
            .unwrap();
        assert_eq!(LowRule::EightOrBetter.table().hand(low.value), Some([5, 4, 3, 2, 1]));
    }

    #[test]
    fn validation() {
        let board = cards("3s 4h 8c Qd Js");
        assert_eq!(
            best_high(&cards("Ah"), &board),
            Err(EvalError::NotEnoughCards)
        );
        assert_eq!(
            best_low(&cards("Ah 2h"), &board[..2], LowRule::AceToFive),
            Err(EvalError::NotEnoughCards)
        );

        let dup = cards("3s")[0];
        assert_eq!(
            best_high(&cards("Ah 3s"), &board),
            Err(EvalError::DuplicateCard(dup))
        );
    }
}
